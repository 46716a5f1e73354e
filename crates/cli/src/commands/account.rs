//! Account and session commands.

use clap::Subcommand;
use tienda_client::forms::{LoginForm, RegisterForm};
use tienda_client::validate;
use tienda_client::App;

use super::{ensure_authenticated, ensure_valid, finish, CliError};

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create a new account
    Register {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        lastname: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        /// Repeat the password
        #[arg(short, long)]
        confirm_password: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        phone_number: Option<String>,
    },
    /// Log in and persist the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Drop the persisted session
    Logout,
    /// Show the authenticated user's profile
    Whoami,
    /// Update the shipping address
    Address {
        /// New shipping address
        address: String,
    },
}

pub async fn run(app: &App, action: AccountAction) -> Result<(), CliError> {
    match action {
        AccountAction::Register {
            name,
            lastname,
            email,
            password,
            confirm_password,
            address,
            city,
            phone_number,
        } => {
            let form = RegisterForm {
                name,
                lastname,
                email,
                password,
                confirm_password,
                address,
                city,
                phone_number,
                ..RegisterForm::default()
            };
            ensure_valid(&validate::register(&form))?;
            finish(app.auth().register(&form).await)?;
            println!("Ahora puedes iniciar sesión con `tienda account login`");
        }
        AccountAction::Login { email, password } => {
            let form = LoginForm { email, password };
            ensure_valid(&validate::login(&form))?;
            if let Some(identity) = finish(app.auth().login(&form).await)? {
                println!("Hola, {} ({})", identity.name, identity.email);
            }
        }
        AccountAction::Logout => {
            finish(app.auth().logout())?;
        }
        AccountAction::Whoami => {
            ensure_authenticated(app)?;
            if let Some(user) = finish(app.users().active().await)? {
                println!("{} {} <{}>", user.name, user.lastname, user.email);
                println!("  rol: {}", user.role);
                if let Some(address) = &user.address {
                    println!("  dirección: {address}");
                }
                if let Some(phone) = &user.phone_number {
                    println!("  teléfono: {phone}");
                }
            }
        }
        AccountAction::Address { address } => {
            ensure_authenticated(app)?;
            ensure_valid(&validate::address(&address))?;
            finish(app.users().update_address(&address).await)?;
        }
    }
    Ok(())
}
