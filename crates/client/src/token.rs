//! Login token decoding.
//!
//! The backend issues a three-part JWT whose payload carries the identity
//! claims the client caches (id, role, email, name). The client only
//! *decodes* the payload; it never verifies the signature - the token is
//! an opaque credential replayed to the server, which does the verifying.
//!
//! Decoding is strict: a token that is not structurally a JWT (three
//! dot-separated segments, base64url payload, JSON claims) is rejected
//! with a [`TokenError`] and nothing is cached or persisted.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tienda_core::{Identity, Role, UserId};

/// Errors from decoding a login token.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token does not have three dot-separated segments.
    #[error("token is not a three-part JWT")]
    Malformed,
    /// The payload segment is not valid base64url.
    #[error("token payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The payload is not the expected claims JSON.
    #[error("token claims are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Claims embedded in the login token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub id: UserId,
    pub role: Role,
    pub email: String,
    pub name: String,
}

impl Claims {
    /// Decode the claims from a raw token, without signature verification.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError`] when the token is structurally invalid; the
    /// caller must not treat the credential as usable in that case.
    pub fn decode(token: &str) -> Result<Self, TokenError> {
        let mut segments = token.split('.');
        let (Some(_header), Some(payload), Some(_signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(TokenError::Malformed);
        };

        let bytes = URL_SAFE_NO_PAD.decode(payload)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// The identity projection this token authenticates.
    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id,
            role: self.role,
            email: self.email.clone(),
            name: self.name.clone(),
        }
    }
}
