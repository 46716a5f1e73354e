//! Authentication envelopes.

use tienda_core::Identity;

use super::{AdapterError, Envelope};
use crate::api::RegisterOutcome;
use crate::error::ErrorKind;
use crate::forms::{LoginForm, RegisterForm};
use crate::session::{Session, SessionError};

/// Envelope layer over the [`Session`] store.
#[derive(Clone)]
pub struct AuthAdapter {
    session: Session,
}

impl AuthAdapter {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Register a new account.
    pub async fn register(&self, form: &RegisterForm) -> Envelope<RegisterOutcome> {
        match self.session.register(form).await {
            Ok(outcome) if outcome.success => {
                Envelope::created(outcome, "Usuario registrado exitosamente")
            }
            Ok(outcome) => {
                let message = outcome
                    .message
                    .clone()
                    .unwrap_or_else(|| "Error al registrar usuario".to_owned());
                Envelope {
                    success: false,
                    data: Some(outcome),
                    message: None,
                    error: Some(AdapterError {
                        kind: ErrorKind::Invalid,
                        message,
                    }),
                }
            }
            Err(err) => Envelope::failed(&err, "Error al registrar usuario"),
        }
    }

    /// Log in and surface the authenticated identity.
    pub async fn login(&self, form: &LoginForm) -> Envelope<Identity> {
        match self.session.login(form).await {
            Ok(identity) => Envelope::created(identity, "Inicio de sesión exitoso"),
            Err(SessionError::Api(err)) => Envelope::failed(&err, "Credenciales inválidas"),
            Err(err @ SessionError::Token(_)) => {
                Envelope::rejected(ErrorKind::Decode, err.to_string())
            }
            Err(err @ SessionError::Storage(_)) => {
                Envelope::rejected(ErrorKind::Decode, err.to_string())
            }
        }
    }

    /// Drop the stored credential.
    pub fn logout(&self) -> Envelope<()> {
        match self.session.logout() {
            Ok(()) => Envelope::done("Sesión cerrada exitosamente"),
            Err(err) => Envelope::rejected(ErrorKind::Decode, err.to_string()),
        }
    }
}
