//! Tienda CLI - command-line storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Create an account and log in
//! tienda account register -n Laura -l Mejia -e laura@example.com -p secreta -c secreta
//! tienda account login -e laura@example.com -p secreta
//!
//! # Browse the catalog
//! tienda products list
//! tienda products search camiseta
//!
//! # Shop
//! tienda cart add 3 --quantity 2
//! tienda cart show
//!
//! # Review
//! tienda reviews show 3
//! tienda reviews rate 3 --stars 5
//! ```
//!
//! # Commands
//!
//! - `account` - register, login, logout, whoami, address
//! - `products` - list, show, search, filter, and (admin) create/update/delete
//! - `cart` - show, add, set, remove
//! - `reviews` - comments and star ratings per product
//! - `images` - list and (admin) upload/delete product images
//! - `users` - (admin) list, search, delete accounts

#![cfg_attr(not(test), forbid(unsafe_code))]
// Printing is this binary's job.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use tienda_client::{App, ClientConfig};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "tienda")]
#[command(author, version, about = "Cliente de consola para la tienda")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the account and session
    Account {
        #[command(subcommand)]
        action: commands::account::AccountAction,
    },
    /// Browse and (admin) manage the product catalog
    Products {
        #[command(subcommand)]
        action: commands::products::ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: commands::cart::CartAction,
    },
    /// Read and write product reviews
    Reviews {
        #[command(subcommand)]
        action: commands::reviews::ReviewsAction,
    },
    /// List and (admin) manage product images
    Images {
        #[command(subcommand)]
        action: commands::images::ImagesAction,
    },
    /// (Admin) manage user accounts
    Users {
        #[command(subcommand)]
        action: commands::users::UsersAction,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let app = App::new(ClientConfig::from_env()?)?;

    // Pick up a previous login so commands run authenticated
    if let Some(identity) = app.restore()? {
        tracing::debug!(user_id = %identity.id, "session restored");
    }

    match cli.command {
        Commands::Account { action } => commands::account::run(&app, action).await,
        Commands::Products { action } => commands::products::run(&app, action).await,
        Commands::Cart { action } => commands::cart::run(&app, action).await,
        Commands::Reviews { action } => commands::reviews::run(&app, action).await,
        Commands::Images { action } => commands::images::run(&app, action).await,
        Commands::Users { action } => commands::users::run(&app, action).await,
    }
}
