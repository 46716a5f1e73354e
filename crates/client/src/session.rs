//! Session state: the authenticated identity and its credential.
//!
//! Owns the only durable client-side state in the application: the login
//! token and the cached identity projection. Both are written on login
//! and removed on logout; everything else in the SDK is re-fetchable.

use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;
use thiserror::Error;
use tienda_core::Identity;
use tracing::info;

use crate::api::{AuthApi, RegisterOutcome, RestClient};
use crate::error::ApiError;
use crate::forms::{LoginForm, RegisterForm};
use crate::storage::{SessionStorage, StorageError, StoredSession};
use crate::token::{Claims, TokenError};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backend rejected the request (login failures surface the
    /// server's message verbatim through this variant).
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend issued a structurally invalid token; nothing was
    /// stored and the session stays unauthenticated.
    #[error("login returned an unusable token: {0}")]
    Token(#[from] TokenError),

    /// The session could not be persisted or cleared.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The session store.
///
/// Cheaply cloneable; all clones share the same identity slot and
/// storage. Mutations go through the methods here - there is no other
/// writer.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    auth: Arc<dyn AuthApi>,
    rest: RestClient,
    storage: Arc<dyn SessionStorage>,
    identity: RwLock<Option<Identity>>,
}

impl Session {
    /// Create a session store over the given auth port, transport, and
    /// durable storage.
    #[must_use]
    pub fn new(auth: Arc<dyn AuthApi>, rest: RestClient, storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                auth,
                rest,
                storage,
                identity: RwLock::new(None),
            }),
        }
    }

    /// Restore a previously persisted session, if any.
    ///
    /// Installs the stored credential on the transport so subsequent
    /// calls are authenticated.
    ///
    /// # Errors
    ///
    /// Returns an error when stored data exists but cannot be read.
    pub fn restore(&self) -> Result<Option<Identity>, StorageError> {
        let Some(stored) = self.inner.storage.load()? else {
            return Ok(None);
        };

        self.inner.rest.set_token(SecretString::from(stored.token));
        *self
            .inner
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(stored.identity.clone());

        Ok(Some(stored.identity))
    }

    /// Register a new account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the registration.
    pub async fn register(&self, form: &RegisterForm) -> Result<RegisterOutcome, ApiError> {
        self.inner.auth.register(form).await
    }

    /// Log in and cache the identity the token authenticates.
    ///
    /// The token's claims are decoded with [`Claims::decode`]; a
    /// structurally invalid token fails the login and nothing is
    /// persisted. On success the credential and identity are written to
    /// durable storage and the transport starts sending the credential.
    ///
    /// # Errors
    ///
    /// Login failures surface the server's message verbatim; no retry.
    pub async fn login(&self, form: &LoginForm) -> Result<Identity, SessionError> {
        let token = self.inner.auth.login(form).await?;
        let claims = Claims::decode(&token)?;
        let identity = claims.identity();

        self.inner.storage.save(&StoredSession {
            token: token.clone(),
            identity: identity.clone(),
        })?;
        self.inner.rest.set_token(SecretString::from(token));
        *self
            .inner
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(identity.clone());

        info!(user_id = %identity.id, "session established");
        Ok(identity)
    }

    /// Clear the stored credential and identity.
    ///
    /// # Errors
    ///
    /// Returns an error when durable storage cannot be cleared; the
    /// in-memory state is dropped regardless.
    pub fn logout(&self) -> Result<(), StorageError> {
        *self
            .inner
            .identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.inner.rest.clear_token();
        self.inner.storage.clear()
    }

    /// Snapshot of the cached identity.
    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.inner
            .identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a credential is currently held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.rest.has_token()
    }

    /// Whether the cached identity holds the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity().is_some_and(|identity| identity.is_admin())
    }
}
