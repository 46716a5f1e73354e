//! Uniform success/error envelopes for front-ends.
//!
//! Each adapter wraps a store or API port and returns an [`Envelope`]
//! instead of a `Result`: success carries the data and the localized
//! confirmation message, failure carries a typed [`AdapterError`] whose
//! message is the server's own text when one was sent, or the operation's
//! localized default otherwise. Front-ends render envelopes directly and
//! never touch `ApiError`.

pub mod auth;
pub mod cart;
pub mod comments;
pub mod evaluations;
pub mod images;
pub mod products;
pub mod users;

pub use auth::AuthAdapter;
pub use cart::CartAdapter;
pub use comments::CommentsAdapter;
pub use evaluations::EvaluationsAdapter;
pub use images::ImagesAdapter;
pub use products::ProductsAdapter;
pub use users::UsersAdapter;

use crate::error::{ApiError, ErrorKind};

/// A failed operation, as surfaced to a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterError {
    /// Typed kind; front-ends branch on this, never on message text.
    pub kind: ErrorKind,
    /// Renderable message: the server's text, or the operation default.
    pub message: String,
}

impl AdapterError {
    pub(crate) fn from_api(err: &ApiError, default: &str) -> Self {
        Self {
            kind: err.kind(),
            message: err.server_message().unwrap_or(default).to_owned(),
        }
    }
}

/// Outcome of an adapter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Payload on success (and, for image listings, an empty list on
    /// failure so front-ends can render unconditionally).
    pub data: Option<T>,
    /// Localized confirmation message for mutations.
    pub message: Option<String>,
    /// Failure details.
    pub error: Option<AdapterError>,
}

impl<T> Envelope<T> {
    /// Successful read: data, no message.
    pub(crate) fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Successful mutation: data plus a confirmation message.
    pub(crate) fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.to_owned()),
            error: None,
        }
    }

    /// Successful mutation with no payload.
    pub(crate) fn done(message: &str) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.to_owned()),
            error: None,
        }
    }

    /// Failed operation with a per-operation default message.
    pub(crate) fn failed(err: &ApiError, default: &str) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(AdapterError::from_api(err, default)),
        }
    }

    pub(crate) fn rejected(kind: ErrorKind, message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(AdapterError { kind, message }),
        }
    }

    /// The failure message, if this envelope carries one.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|err| err.message.as_str())
    }

    /// The failure kind, if this envelope carries one.
    #[must_use]
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|err| err.kind)
    }
}

/// Not-found on a list fetch means "no matches", not a failure.
pub(crate) fn empty_on_not_found<T>(
    result: Result<Vec<T>, ApiError>,
) -> Result<Vec<T>, ApiError> {
    match result {
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}
