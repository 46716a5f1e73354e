//! Product image records.

use serde::{Deserialize, Serialize};

use crate::{ImageId, ProductId};

/// An image attached to a product.
///
/// Created by multipart upload (type jpeg/png/gif/webp, at most 5 MiB;
/// both checked client-side before the upload), destroyed by delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Image ID (`id_image` on the wire).
    #[serde(rename = "id_image")]
    pub id: ImageId,
    /// Product the image belongs to.
    #[serde(rename = "id_product")]
    pub product_id: ProductId,
    /// Public URL where the stored image is served from.
    #[serde(rename = "image_url")]
    pub url: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_image_wire_names() {
        let json = r#"{"id_image": 6, "id_product": 2, "image_url": "https://cdn.example.com/p/2/6.webp"}"#;
        let image: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(image.id, ImageId::new(6));
        assert!(image.url.ends_with(".webp"));
    }
}
