//! Command implementations.
//!
//! Each module drives the SDK stores and adapters the same way: validate
//! the form, call the adapter, print the envelope's localized message.
//! Admin-only mutations are guarded by the cached identity's role before
//! any request is sent.

pub mod account;
pub mod cart;
pub mod images;
pub mod products;
pub mod reviews;
pub mod users;

use thiserror::Error;
use tienda_client::adapters::Envelope;
use tienda_client::config::ConfigError;
use tienda_client::storage::StorageError;
use tienda_client::validate::Validation;
use tienda_client::{ApiError, App};

/// Errors a CLI command can surface.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The backend rejected the operation; carries the envelope message.
    #[error("{0}")]
    Command(String),

    /// Client-side validation failed; field errors were already printed.
    #[error("Formulario incompleto")]
    InvalidForm,

    #[error("Debes iniciar sesión primero")]
    NotAuthenticated,

    #[error("Acceso restringido a administradores")]
    NotAdmin,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Print field errors and fail when the form did not validate.
pub(crate) fn ensure_valid(validation: &Validation) -> Result<(), CliError> {
    if validation.is_valid() {
        return Ok(());
    }
    for (field, message) in validation.errors() {
        eprintln!("  {field}: {message}");
    }
    Err(CliError::InvalidForm)
}

pub(crate) fn ensure_authenticated(app: &App) -> Result<(), CliError> {
    if app.session().is_authenticated() {
        Ok(())
    } else {
        Err(CliError::NotAuthenticated)
    }
}

pub(crate) fn ensure_admin(app: &App) -> Result<(), CliError> {
    ensure_authenticated(app)?;
    if app.session().is_admin() {
        Ok(())
    } else {
        Err(CliError::NotAdmin)
    }
}

/// Unwrap an envelope: print the confirmation message, or fail with the
/// envelope's error message.
pub(crate) fn finish<T>(envelope: Envelope<T>) -> Result<Option<T>, CliError> {
    if envelope.success {
        if let Some(message) = &envelope.message {
            println!("{message}");
        }
        Ok(envelope.data)
    } else {
        Err(CliError::Command(
            envelope
                .error_message()
                .unwrap_or("error del servidor")
                .to_owned(),
        ))
    }
}
