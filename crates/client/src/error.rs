//! Error taxonomy for API calls.
//!
//! Every failed operation lands in one of three buckets: the request never
//! completed ([`ApiError::Http`]), the body could not be decoded
//! ([`ApiError::Parse`]), or the backend answered with an error payload
//! ([`ApiError::Backend`]). Backend errors carry a typed [`ErrorKind`] so
//! callers branch on the kind, never on message content; the one place
//! that inspects message text is the translation boundary in
//! [`crate::api`].

use thiserror::Error;

/// Classified error kind, derived once at the response-translation
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be sent or the connection failed.
    Network,
    /// The response body was not the expected shape.
    Decode,
    /// 404-style response. List fetches normalize this to an empty result.
    NotFound,
    /// Missing or rejected credential.
    Unauthorized,
    /// Authenticated but not allowed (e.g. admin-only operation).
    Forbidden,
    /// The product is already in the cart; the server rejects duplicate
    /// lines instead of merging quantities.
    DuplicateCartItem,
    /// Any other 4xx rejection.
    Invalid,
    /// 5xx response.
    Server,
}

/// An error payload returned by the backend.
///
/// `message` holds the server's human-readable text when the body carried
/// one (`message` field, falling back to `mensaje`); callers substitute a
/// per-operation localized default when it is absent.
#[derive(Debug, Clone, Error)]
#[error("{}", self.message.as_deref().unwrap_or("error del servidor"))]
pub struct BackendError {
    /// Classified kind.
    pub kind: ErrorKind,
    /// HTTP status code.
    pub status: u16,
    /// Server-provided message, verbatim.
    pub message: Option<String>,
}

/// Errors that can occur when calling the storefront API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),

    /// The backend answered with an error status.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl ApiError {
    /// Classified kind of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Http(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Decode,
            Self::Backend(err) => err.kind,
        }
    }

    /// Whether the backend reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.kind(), ErrorKind::NotFound)
    }

    /// The server's own message, when one was present in the error body.
    ///
    /// Network and decode failures have no server message; the adapter
    /// layer falls back to its per-operation default for those.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Backend(err) => err.message.as_deref(),
            Self::Http(_) | Self::Parse(_) => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_error_display_uses_server_message() {
        let err = BackendError {
            kind: ErrorKind::Invalid,
            status: 400,
            message: Some("El producto ya está en el carrito".to_owned()),
        };
        assert_eq!(err.to_string(), "El producto ya está en el carrito");
    }

    #[test]
    fn test_backend_error_display_without_message() {
        let err = BackendError {
            kind: ErrorKind::Server,
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "error del servidor");
    }

    #[test]
    fn test_kind_and_not_found() {
        let err = ApiError::Backend(BackendError {
            kind: ErrorKind::NotFound,
            status: 404,
            message: None,
        });
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
        assert!(err.server_message().is_none());
    }
}
