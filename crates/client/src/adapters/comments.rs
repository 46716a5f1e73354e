//! Comment envelopes.

use std::sync::Arc;

use tienda_core::{Comment, CommentId, ProductId, UserId};

use super::{empty_on_not_found, Envelope};
use crate::api::CommentsApi;
use crate::forms::CommentForm;

/// Envelope layer over the comments port.
#[derive(Clone)]
pub struct CommentsAdapter {
    api: Arc<dyn CommentsApi>,
}

impl CommentsAdapter {
    #[must_use]
    pub fn new(api: Arc<dyn CommentsApi>) -> Self {
        Self { api }
    }

    /// Fetch every comment (admin listing).
    pub async fn all(&self) -> Envelope<Vec<Comment>> {
        match empty_on_not_found(self.api.all().await) {
            Ok(comments) => Envelope::data(comments),
            Err(err) => Envelope::failed(&err, "Error al cargar comentarios"),
        }
    }

    /// Fetch a product's comments.
    pub async fn by_product(&self, product_id: ProductId) -> Envelope<Vec<Comment>> {
        match empty_on_not_found(self.api.by_product(product_id).await) {
            Ok(comments) => Envelope::data(comments),
            Err(err) => Envelope::failed(&err, "Error al cargar comentarios del producto"),
        }
    }

    /// Fetch a user's comments.
    pub async fn by_user(&self, user_id: UserId) -> Envelope<Vec<Comment>> {
        match empty_on_not_found(self.api.by_user(user_id).await) {
            Ok(comments) => Envelope::data(comments),
            Err(err) => Envelope::failed(&err, "Error al cargar comentarios del usuario"),
        }
    }

    /// Create a comment.
    pub async fn create(&self, form: &CommentForm) -> Envelope<Comment> {
        match self.api.create(form).await {
            Ok(comment) => Envelope::created(comment, "Comentario creado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al crear comentario"),
        }
    }

    /// Update a comment.
    pub async fn update(&self, id: CommentId, form: &CommentForm) -> Envelope<()> {
        match self.api.update(id, form).await {
            Ok(()) => Envelope::done("Comentario actualizado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al actualizar comentario"),
        }
    }

    /// Delete a comment (author or admin, server enforced).
    pub async fn delete(&self, id: CommentId) -> Envelope<()> {
        match self.api.delete(id).await {
            Ok(()) => Envelope::done("Comentario eliminado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al eliminar comentario"),
        }
    }
}
