//! Form payloads submitted by front-ends.
//!
//! These are the shapes the validation layer checks and the API layer
//! serializes. Wire field names follow the backend contract (`tipe`,
//! `id_product`, `id_user`, `confirmPassword`).

use rust_decimal::Decimal;
use serde::Serialize;
use tienda_core::{ProductId, UserId};

/// Registration payload for `POST /auth/register`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterForm {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "confirmPassword")]
    pub confirm_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,
}

/// Login payload for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Product payload for the admin create/update operations.
#[derive(Debug, Clone, Serialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: Decimal,
    pub size: String,
    #[serde(rename = "tipe")]
    pub product_type: String,
}

/// Comment payload for `POST /comments/`.
///
/// The IDs are optional here so the validator can report the missing
/// reference instead of the caller panicking on construction.
#[derive(Debug, Clone, Serialize)]
pub struct CommentForm {
    #[serde(rename = "comment")]
    pub text: String,
    #[serde(rename = "id_product", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(rename = "id_user", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// Evaluation payload for `POST /evaluations/`.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationForm {
    pub assessment: i32,
    #[serde(rename = "id_product", skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    #[serde(rename = "id_user", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
}

/// An image file staged for multipart upload.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Original file name, forwarded in the multipart part.
    pub file_name: String,
    /// MIME type (e.g. `image/png`).
    pub content_type: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    /// Size of the staged file in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
