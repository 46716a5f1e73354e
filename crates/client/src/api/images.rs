//! Product image endpoints.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tienda_core::{ImageId, ImageRecord, ProductId};

use super::ports::ImagesApi;
use super::RestClient;
use crate::error::ApiError;
use crate::forms::ImageUpload;

#[derive(Debug, Deserialize)]
struct ImageListBody {
    #[serde(default)]
    imagenes: Vec<ImageRecord>,
}

#[async_trait]
impl ImagesApi for RestClient {
    async fn by_product(&self, product_id: ProductId) -> Result<Vec<ImageRecord>, ApiError> {
        let body: ImageListBody = self
            .get_json(&format!("images/product/{product_id}"), &[])
            .await?;
        Ok(body.imagenes)
    }

    async fn upload(&self, product_id: ProductId, file: ImageUpload) -> Result<(), ApiError> {
        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("image", part);
        self.post_multipart(&format!("images/{product_id}"), form)
            .await
    }

    async fn delete(&self, id: ImageId) -> Result<(), ApiError> {
        self.delete_unit(&format!("images/{id}")).await
    }
}
