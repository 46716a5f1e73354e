//! Product image envelopes.

use std::sync::Arc;

use tienda_core::{ImageId, ImageRecord, ProductId};

use super::{AdapterError, Envelope};
use crate::api::ImagesApi;
use crate::forms::ImageUpload;

/// Envelope layer over the images port.
#[derive(Clone)]
pub struct ImagesAdapter {
    api: Arc<dyn ImagesApi>,
}

impl ImagesAdapter {
    #[must_use]
    pub fn new(api: Arc<dyn ImagesApi>) -> Self {
        Self { api }
    }

    /// Fetch a product's images.
    ///
    /// On failure the envelope still carries an empty list so galleries
    /// can render unconditionally.
    pub async fn by_product(&self, product_id: ProductId) -> Envelope<Vec<ImageRecord>> {
        match self.api.by_product(product_id).await {
            Ok(images) => Envelope::data(images),
            Err(err) if err.is_not_found() => Envelope::data(Vec::new()),
            Err(err) => Envelope {
                success: false,
                data: Some(Vec::new()),
                message: None,
                error: Some(AdapterError::from_api(&err, "Error al obtener imágenes")),
            },
        }
    }

    /// Upload an image for a product (admin).
    pub async fn upload(&self, product_id: ProductId, file: ImageUpload) -> Envelope<()> {
        match self.api.upload(product_id, file).await {
            Ok(()) => Envelope::done("Imagen subida exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al subir imagen"),
        }
    }

    /// Delete an image (admin).
    pub async fn delete(&self, id: ImageId) -> Envelope<()> {
        match self.api.delete(id).await {
            Ok(()) => Envelope::done("Imagen eliminada exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al eliminar imagen"),
        }
    }
}
