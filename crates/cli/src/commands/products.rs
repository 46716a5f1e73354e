//! Catalog commands.

use clap::Subcommand;
use rust_decimal::Decimal;
use tienda_client::forms::ProductForm;
use tienda_client::validate;
use tienda_client::App;
use tienda_core::{Product, ProductId};

use super::{ensure_admin, ensure_valid, finish, CliError};

#[derive(Subcommand)]
pub enum ProductsAction {
    /// List the full catalog
    List,
    /// Show one product
    Show {
        /// Product ID
        id: i32,
    },
    /// Search products by name
    Search {
        /// Search term
        term: String,
    },
    /// Filter products by type
    Type {
        /// Product type (e.g. camiseta)
        product_type: String,
    },
    /// Filter products by size
    Size {
        /// Garment size (e.g. M)
        size: String,
    },
    /// Create a product (admin)
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        quantity: i32,
        #[arg(short, long)]
        price: Decimal,
        #[arg(short, long)]
        size: String,
        #[arg(short = 't', long = "type")]
        product_type: String,
    },
    /// Update a product (admin)
    Update {
        /// Product ID
        id: i32,
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        description: String,
        #[arg(short, long)]
        quantity: i32,
        #[arg(short, long)]
        price: Decimal,
        #[arg(short, long)]
        size: String,
        #[arg(short = 't', long = "type")]
        product_type: String,
    },
    /// Delete a product (admin)
    Delete {
        /// Product ID
        id: i32,
    },
}

fn print_list(products: &[Product]) {
    if products.is_empty() {
        println!("No hay productos");
        return;
    }
    for product in products {
        println!(
            "{:>4}  {:<30} {:>10}  talla {:<3} {:<12} stock {}",
            product.id, product.name, product.price, product.size, product.product_type,
            product.quantity
        );
    }
}

pub async fn run(app: &App, action: ProductsAction) -> Result<(), CliError> {
    match action {
        ProductsAction::List => {
            if let Some(products) = finish(app.products().all().await)? {
                print_list(&products);
            }
        }
        ProductsAction::Show { id } => {
            if let Some(product) = finish(app.products().by_id(ProductId::new(id)).await)? {
                println!("{} ({})", product.name, product.product_type);
                println!("  {}", product.description);
                println!("  precio: {}", product.price);
                println!("  talla: {}", product.size);
                if product.in_stock() {
                    println!("  stock: {}", product.quantity);
                } else {
                    println!("  agotado");
                }
            }
        }
        ProductsAction::Search { term } => {
            if let Some(products) = finish(app.products().search(&term).await)? {
                print_list(&products);
            }
        }
        ProductsAction::Type { product_type } => {
            if let Some(products) = finish(app.products().by_type(&product_type).await)? {
                print_list(&products);
            }
        }
        ProductsAction::Size { size } => {
            if let Some(products) = finish(app.products().by_size(&size).await)? {
                print_list(&products);
            }
        }
        ProductsAction::Create {
            name,
            description,
            quantity,
            price,
            size,
            product_type,
        } => {
            ensure_admin(app)?;
            let form = ProductForm {
                name,
                description,
                quantity,
                price,
                size,
                product_type,
            };
            ensure_valid(&validate::product(&form))?;
            if let Some(product) = finish(app.products().create(&form).await)? {
                println!("ID asignado: {}", product.id);
                println!("Ahora puedes subir imágenes con `tienda images upload {}`", product.id);
            }
        }
        ProductsAction::Update {
            id,
            name,
            description,
            quantity,
            price,
            size,
            product_type,
        } => {
            ensure_admin(app)?;
            let form = ProductForm {
                name,
                description,
                quantity,
                price,
                size,
                product_type,
            };
            ensure_valid(&validate::product(&form))?;
            finish(app.products().update(ProductId::new(id), &form).await)?;
        }
        ProductsAction::Delete { id } => {
            ensure_admin(app)?;
            finish(app.products().delete(ProductId::new(id)).await)?;
        }
    }
    Ok(())
}
