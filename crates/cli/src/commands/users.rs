//! Admin user management commands.

use clap::Subcommand;
use tienda_client::App;
use tienda_core::{User, UserId};

use super::{ensure_admin, finish, CliError};

#[derive(Subcommand)]
pub enum UsersAction {
    /// List every account (admin)
    List,
    /// Look up accounts by email substring (admin)
    Search {
        /// Email or fragment
        email: String,
    },
    /// Show one account (admin)
    Show {
        /// User ID
        id: i32,
    },
    /// Delete an account (admin)
    Delete {
        /// User ID
        id: i32,
    },
}

fn print_list(users: &[User]) {
    if users.is_empty() {
        println!("No se encontraron usuarios");
        return;
    }
    for user in users {
        println!(
            "{:>4}  {:<20} {:<20} <{}>  {}",
            user.id, user.name, user.lastname, user.email, user.role
        );
    }
}

pub async fn run(app: &App, action: UsersAction) -> Result<(), CliError> {
    ensure_admin(app)?;

    match action {
        UsersAction::List => {
            if let Some(users) = finish(app.users().all().await)? {
                print_list(&users);
            }
        }
        UsersAction::Search { email } => {
            if let Some(users) = finish(app.users().by_email(&email).await)? {
                print_list(&users);
            }
        }
        UsersAction::Show { id } => {
            if let Some(user) = finish(app.users().by_id(UserId::new(id)).await)? {
                println!("{} {} <{}>", user.name, user.lastname, user.email);
                println!("  rol: {}", user.role);
                if let Some(address) = &user.address {
                    println!("  dirección: {address}");
                }
            }
        }
        UsersAction::Delete { id } => {
            finish(app.users().delete(UserId::new(id)).await)?;
        }
    }
    Ok(())
}
