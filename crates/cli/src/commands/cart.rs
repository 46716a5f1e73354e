//! Shopping cart commands.

use clap::Subcommand;
use tienda_client::cart::CartLine;
use tienda_client::App;
use tienda_core::{CartItemId, ProductId};

use super::{ensure_authenticated, finish, CliError};

#[derive(Subcommand)]
pub enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: i32,
        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: i32,
    },
    /// Change a line's quantity
    Set {
        /// Cart line ID
        item_id: i32,
        /// New quantity
        quantity: i32,
    },
    /// Remove a line from the cart
    Remove {
        /// Cart line ID
        item_id: i32,
    },
}

fn print_line(line: &CartLine) {
    match (&line.product_name, line.price) {
        (Some(name), Some(price)) => {
            println!(
                "{:>4}  {:<30} {} x {:>10} = {}",
                line.id,
                name,
                line.quantity,
                price,
                line.subtotal()
            );
        }
        // Enrichment failed for this line; show what the server sent
        _ => println!(
            "{:>4}  producto #{} x {} (sin detalles)",
            line.id, line.product_id, line.quantity
        ),
    }
}

pub async fn run(app: &App, action: CartAction) -> Result<(), CliError> {
    ensure_authenticated(app)?;

    match action {
        CartAction::Show => {
            if let Some(lines) = finish(app.cart_adapter().items().await)? {
                if lines.is_empty() {
                    println!("El carrito está vacío");
                } else {
                    for line in &lines {
                        print_line(line);
                    }
                    println!("Total: {} ({} artículos)", app.cart().total(), app.cart().count());
                }
            }
        }
        CartAction::Add {
            product_id,
            quantity,
        } => {
            finish(
                app.cart_adapter()
                    .add(ProductId::new(product_id), quantity)
                    .await,
            )?;
        }
        CartAction::Set { item_id, quantity } => {
            finish(
                app.cart_adapter()
                    .set_quantity(CartItemId::new(item_id), quantity)
                    .await,
            )?;
        }
        CartAction::Remove { item_id } => {
            finish(app.cart_adapter().remove(CartItemId::new(item_id)).await)?;
        }
    }
    Ok(())
}
