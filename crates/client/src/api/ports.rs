//! Per-entity API ports.
//!
//! Each trait is the seam between a store or adapter and the wire: the
//! [`RestClient`](super::RestClient) implements all of them against the
//! real backend, and tests substitute in-memory fakes. Stores receive
//! `Arc<dyn ...>` handles instead of reaching for any ambient client.

use async_trait::async_trait;
use tienda_core::{
    CartItem, CartItemId, Comment, CommentId, Evaluation, EvaluationId, ImageId, ImageRecord,
    Product, ProductId, User, UserId,
};

use crate::error::ApiError;
use crate::forms::{
    CommentForm, EvaluationForm, ImageUpload, LoginForm, ProductForm, RegisterForm,
};

/// Outcome of a registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    /// Whether the backend reported `status == "Success"`.
    pub success: bool,
    /// Server-provided message (`mensaje`), when present.
    pub message: Option<String>,
}

/// Authentication endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /auth/register`.
    async fn register(&self, form: &RegisterForm) -> Result<RegisterOutcome, ApiError>;

    /// `POST /auth/login`; returns the raw credential token.
    async fn login(&self, form: &LoginForm) -> Result<String, ApiError>;
}

/// Product catalog endpoints.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /products/`.
    async fn all(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/id/{id}`.
    async fn by_id(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `GET /products/name?name=...`.
    async fn search(&self, term: &str) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/tipe?tipe=...`.
    async fn by_type(&self, product_type: &str) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/size?size=...`.
    async fn by_size(&self, size: &str) -> Result<Vec<Product>, ApiError>;

    /// `POST /products/` (admin).
    async fn create(&self, form: &ProductForm) -> Result<Product, ApiError>;

    /// `PUT /products/{id}` (admin).
    async fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, ApiError>;

    /// `DELETE /products/{id}` (admin).
    async fn delete(&self, id: ProductId) -> Result<(), ApiError>;
}

/// Cart endpoints for the authenticated user.
#[async_trait]
pub trait CartApi: Send + Sync {
    /// `GET /cart/`; raw lines, no product metadata.
    async fn items(&self) -> Result<Vec<CartItem>, ApiError>;

    /// `POST /cart/`. The server rejects a second line for the same
    /// product (`ErrorKind::DuplicateCartItem`).
    async fn add(&self, product_id: ProductId, quantity: i32) -> Result<(), ApiError>;

    /// `PUT /cart/{id}`.
    async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), ApiError>;

    /// `DELETE /cart/{id}`.
    async fn remove(&self, id: CartItemId) -> Result<(), ApiError>;
}

/// Comment endpoints.
#[async_trait]
pub trait CommentsApi: Send + Sync {
    /// `GET /comments/` (admin listing).
    async fn all(&self) -> Result<Vec<Comment>, ApiError>;

    /// `GET /comments/product/{id}`.
    async fn by_product(&self, product_id: ProductId) -> Result<Vec<Comment>, ApiError>;

    /// `GET /comments/user/{id}`.
    async fn by_user(&self, user_id: UserId) -> Result<Vec<Comment>, ApiError>;

    /// `POST /comments/`.
    async fn create(&self, form: &CommentForm) -> Result<Comment, ApiError>;

    /// `PUT /comments/id/{id}`.
    async fn update(&self, id: CommentId, form: &CommentForm) -> Result<(), ApiError>;

    /// `DELETE /comments/id/{id}`; author-or-admin only, server enforced.
    async fn delete(&self, id: CommentId) -> Result<(), ApiError>;
}

/// Evaluation (star rating) endpoints.
#[async_trait]
pub trait EvaluationsApi: Send + Sync {
    /// `GET /evaluations/` (admin listing).
    async fn all(&self) -> Result<Vec<Evaluation>, ApiError>;

    /// `GET /evaluations/product/{id}`.
    async fn by_product(&self, product_id: ProductId) -> Result<Vec<Evaluation>, ApiError>;

    /// `GET /evaluations/user/{id}`.
    async fn by_user(&self, user_id: UserId) -> Result<Vec<Evaluation>, ApiError>;

    /// `POST /evaluations/`.
    async fn create(&self, form: &EvaluationForm) -> Result<Evaluation, ApiError>;

    /// `PUT /evaluations/id/{id}`.
    async fn update(&self, id: EvaluationId, form: &EvaluationForm) -> Result<(), ApiError>;

    /// `DELETE /evaluations/id/{id}`; author-or-admin only, server enforced.
    async fn delete(&self, id: EvaluationId) -> Result<(), ApiError>;
}

/// Product image endpoints.
#[async_trait]
pub trait ImagesApi: Send + Sync {
    /// `GET /images/product/{id}`.
    async fn by_product(&self, product_id: ProductId) -> Result<Vec<ImageRecord>, ApiError>;

    /// `POST /images/{productId}` (multipart upload, admin).
    async fn upload(&self, product_id: ProductId, file: ImageUpload) -> Result<(), ApiError>;

    /// `DELETE /images/{id}` (admin).
    async fn delete(&self, id: ImageId) -> Result<(), ApiError>;
}

/// User account endpoints.
#[async_trait]
pub trait UsersApi: Send + Sync {
    /// `GET /users` (admin listing).
    async fn all(&self) -> Result<Vec<User>, ApiError>;

    /// `GET /users/active`; the authenticated user's own record.
    async fn active(&self) -> Result<User, ApiError>;

    /// `GET /users/id/{id}`.
    async fn by_id(&self, id: UserId) -> Result<User, ApiError>;

    /// `POST /users/email`; substring lookup, may match several users.
    async fn by_email(&self, email: &str) -> Result<Vec<User>, ApiError>;

    /// `PUT /users/`; updates the authenticated user's address.
    async fn update_address(&self, address: &str) -> Result<User, ApiError>;

    /// `DELETE /users/{id}` (admin).
    async fn delete(&self, id: UserId) -> Result<(), ApiError>;
}
