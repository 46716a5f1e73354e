//! Comment endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use tienda_core::{Comment, CommentId, ProductId, UserId};

use super::ports::CommentsApi;
use super::RestClient;
use crate::error::ApiError;
use crate::forms::CommentForm;

#[derive(Debug, Deserialize)]
struct CommentListBody {
    #[serde(default)]
    comentarios: Vec<Comment>,
}

#[derive(Debug, Deserialize)]
struct CommentBody {
    comentario: Comment,
}

#[async_trait]
impl CommentsApi for RestClient {
    async fn all(&self) -> Result<Vec<Comment>, ApiError> {
        let body: CommentListBody = self.get_json("comments/", &[]).await?;
        Ok(body.comentarios)
    }

    async fn by_product(&self, product_id: ProductId) -> Result<Vec<Comment>, ApiError> {
        let body: CommentListBody = self
            .get_json(&format!("comments/product/{product_id}"), &[])
            .await?;
        Ok(body.comentarios)
    }

    async fn by_user(&self, user_id: UserId) -> Result<Vec<Comment>, ApiError> {
        let body: CommentListBody = self
            .get_json(&format!("comments/user/{user_id}"), &[])
            .await?;
        Ok(body.comentarios)
    }

    async fn create(&self, form: &CommentForm) -> Result<Comment, ApiError> {
        let body: CommentBody = self.post_json("comments/", form).await?;
        Ok(body.comentario)
    }

    async fn update(&self, id: CommentId, form: &CommentForm) -> Result<(), ApiError> {
        self.put_unit(&format!("comments/id/{id}"), form).await
    }

    async fn delete(&self, id: CommentId) -> Result<(), ApiError> {
        self.delete_unit(&format!("comments/id/{id}")).await
    }
}
