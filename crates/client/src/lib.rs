//! Tienda client SDK.
//!
//! Client-side library for the Tienda storefront REST backend. The server
//! owns every record; this crate owns the transient, re-fetchable copies
//! and the shaping around them:
//!
//! - [`session`] - authenticated identity derived from the login token,
//!   persisted locally together with the credential
//! - [`catalog`] - in-memory product list with search/filter views
//! - [`cart`] - cart lines enriched with product metadata, totals, counts
//! - [`validate`] - pure form validation, run before anything touches the
//!   network
//! - [`api`] / [`adapters`] - per-entity REST calls and the uniform
//!   success/error envelope consumed by front-ends
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_client::{App, ClientConfig, forms::LoginForm};
//!
//! let app = App::new(ClientConfig::from_env()?)?;
//! let identity = app.session().login(&LoginForm {
//!     email: "laura@example.com".into(),
//!     password: "secreta".into(),
//! }).await?;
//!
//! app.cart().add(product.id, 1).await?;
//! println!("{} articulos, total {}", app.cart().count(), app.cart().total());
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod adapters;
pub mod api;
pub mod app;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod session;
pub mod storage;
pub mod token;
pub mod validate;

pub use adapters::Envelope;
pub use app::App;
pub use config::ClientConfig;
pub use error::{ApiError, ErrorKind};
