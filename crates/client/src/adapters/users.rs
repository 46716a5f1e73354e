//! User account envelopes.

use std::sync::Arc;

use tienda_core::{User, UserId};

use super::{empty_on_not_found, Envelope};
use crate::api::UsersApi;

/// Envelope layer over the users port.
#[derive(Clone)]
pub struct UsersAdapter {
    api: Arc<dyn UsersApi>,
}

impl UsersAdapter {
    #[must_use]
    pub fn new(api: Arc<dyn UsersApi>) -> Self {
        Self { api }
    }

    /// Fetch every user (admin listing).
    pub async fn all(&self) -> Envelope<Vec<User>> {
        match empty_on_not_found(self.api.all().await) {
            Ok(users) => Envelope::data(users),
            Err(err) => Envelope::failed(&err, "Error al cargar usuarios"),
        }
    }

    /// Fetch the authenticated user's own record.
    pub async fn active(&self) -> Envelope<User> {
        match self.api.active().await {
            Ok(user) => Envelope::data(user),
            Err(err) => Envelope::failed(&err, "Error al cargar perfil"),
        }
    }

    /// Fetch one user.
    pub async fn by_id(&self, id: UserId) -> Envelope<User> {
        match self.api.by_id(id).await {
            Ok(user) => Envelope::data(user),
            Err(err) => Envelope::failed(&err, "Error al cargar usuario"),
        }
    }

    /// Look up users by email substring (admin).
    pub async fn by_email(&self, email: &str) -> Envelope<Vec<User>> {
        match empty_on_not_found(self.api.by_email(email).await) {
            Ok(users) => Envelope::data(users),
            Err(err) => Envelope::failed(&err, "Error al buscar usuarios"),
        }
    }

    /// Update the authenticated user's shipping address.
    pub async fn update_address(&self, address: &str) -> Envelope<User> {
        match self.api.update_address(address).await {
            Ok(user) => Envelope::created(user, "Dirección actualizada exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al actualizar dirección"),
        }
    }

    /// Delete a user (admin).
    pub async fn delete(&self, id: UserId) -> Envelope<()> {
        match self.api.delete(id).await {
            Ok(()) => Envelope::done("Usuario eliminado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al eliminar usuario"),
        }
    }
}
