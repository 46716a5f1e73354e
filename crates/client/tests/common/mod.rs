//! In-memory fakes for the API ports.
//!
//! Each fake mimics the backend's observable behavior: Spanish error
//! messages, 404 on empty/missing records, and the duplicate-cart
//! rejection. Tests flip `fail_kind` to simulate outages.

// Not every test binary uses every fake.
#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use std::sync::Mutex;

use async_trait::async_trait;
use rust_decimal::Decimal;
use tienda_client::api::{AuthApi, CartApi, CommentsApi, ImagesApi, ProductsApi, RegisterOutcome};
use tienda_client::error::{ApiError, BackendError, ErrorKind};
use tienda_client::forms::{CommentForm, ImageUpload, LoginForm, ProductForm, RegisterForm};
use tienda_core::{
    CartItem, CartItemId, Comment, CommentId, ImageId, ImageRecord, Product, ProductId, UserId,
};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub fn backend(kind: ErrorKind, status: u16, message: Option<&str>) -> ApiError {
    ApiError::Backend(BackendError {
        kind,
        status,
        message: message.map(str::to_owned),
    })
}

pub fn not_found(message: &str) -> ApiError {
    backend(ErrorKind::NotFound, 404, Some(message))
}

pub fn product(id: i32, name: &str, price: i64, stock: i32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: format!("{name} de algodon, corte clasico"),
        quantity: stock,
        price: Decimal::from(price),
        size: "M".to_owned(),
        product_type: "camiseta".to_owned(),
        image: None,
    }
}

/// Forge a structurally valid, unsigned login token.
pub fn forge_token(id: i32, role: &str, email: &str, name: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({
        "id": id,
        "role": role,
        "email": email,
        "name": name,
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    format!("{header}.{payload}.firma-invalida")
}

fn induced(kind: ErrorKind) -> ApiError {
    let status = match kind {
        ErrorKind::NotFound => 404,
        ErrorKind::Unauthorized => 401,
        ErrorKind::Forbidden => 403,
        ErrorKind::Server => 500,
        _ => 400,
    };
    backend(kind, status, None)
}

/// Products port over an in-memory list.
pub struct FakeProducts {
    products: Mutex<Vec<Product>>,
    fail_kind: Mutex<Option<ErrorKind>>,
}

impl FakeProducts {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            fail_kind: Mutex::new(None),
        }
    }

    /// Make every subsequent call fail with the given kind.
    pub fn fail_with(&self, kind: ErrorKind) {
        *self.fail_kind.lock().unwrap() = Some(kind);
    }

    fn failure(&self) -> Option<ApiError> {
        self.fail_kind.lock().unwrap().map(induced)
    }

    fn list(&self) -> Vec<Product> {
        self.products.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductsApi for FakeProducts {
    async fn all(&self) -> Result<Vec<Product>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let list = self.list();
        if list.is_empty() {
            return Err(not_found("No hay productos"));
        }
        Ok(list)
    }

    async fn by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        self.list()
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Producto no encontrado"))
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<Product> = self
            .list()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay productos"));
        }
        Ok(matches)
    }

    async fn by_type(&self, product_type: &str) -> Result<Vec<Product>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<Product> = self
            .list()
            .into_iter()
            .filter(|p| p.product_type == product_type)
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay productos"));
        }
        Ok(matches)
    }

    async fn by_size(&self, size: &str) -> Result<Vec<Product>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<Product> = self
            .list()
            .into_iter()
            .filter(|p| p.size == size)
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay productos"));
        }
        Ok(matches)
    }

    async fn create(&self, form: &ProductForm) -> Result<Product, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut products = self.products.lock().unwrap();
        let next = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;
        let created = Product {
            id: ProductId::new(next),
            name: form.name.clone(),
            description: form.description.clone(),
            quantity: form.quantity,
            price: form.price,
            size: form.size.clone(),
            product_type: form.product_type.clone(),
            image: None,
        };
        products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut products = self.products.lock().unwrap();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("Producto no encontrado"))?;
        product.name = form.name.clone();
        product.description = form.description.clone();
        product.quantity = form.quantity;
        product.price = form.price;
        product.size = form.size.clone();
        product.product_type = form.product_type.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        if products.len() == before {
            return Err(not_found("Producto no encontrado"));
        }
        Ok(())
    }
}

/// Cart port over an in-memory line list. Answers 404 for an empty cart
/// and rejects duplicate product lines, like the real backend.
pub struct FakeCart {
    items: Mutex<Vec<CartItem>>,
    next_id: Mutex<i32>,
}

impl FakeCart {
    pub fn new(items: Vec<CartItem>) -> Self {
        let next = items.iter().map(|i| i.id.as_i32()).max().unwrap_or(0) + 1;
        Self {
            items: Mutex::new(items),
            next_id: Mutex::new(next),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CartApi for FakeCart {
    async fn items(&self) -> Result<Vec<CartItem>, ApiError> {
        let items = self.items.lock().unwrap().clone();
        if items.is_empty() {
            return Err(not_found("El carrito está vacío"));
        }
        Ok(items)
    }

    async fn add(&self, product_id: ProductId, quantity: i32) -> Result<(), ApiError> {
        let mut items = self.items.lock().unwrap();
        if items.iter().any(|i| i.product_id == product_id) {
            return Err(backend(
                ErrorKind::DuplicateCartItem,
                400,
                Some("El producto ya está en el carrito"),
            ));
        }
        let mut next = self.next_id.lock().unwrap();
        items.push(CartItem {
            id: CartItemId::new(*next),
            product_id,
            quantity,
        });
        *next += 1;
        Ok(())
    }

    async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), ApiError> {
        let mut items = self.items.lock().unwrap();
        let item = items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Item no encontrado"))?;
        item.quantity = quantity;
        Ok(())
    }

    async fn remove(&self, id: CartItemId) -> Result<(), ApiError> {
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == before {
            return Err(not_found("Item no encontrado"));
        }
        Ok(())
    }
}

/// Auth port with one configured account.
pub struct FakeAuth {
    /// Token handed out on successful login.
    pub token: String,
    /// Expected password; anything else gets a 401.
    pub password: String,
}

impl FakeAuth {
    pub fn new(token: String, password: &str) -> Self {
        Self {
            token,
            password: password.to_owned(),
        }
    }
}

/// Comments port over an in-memory list.
pub struct FakeComments {
    comments: Mutex<Vec<Comment>>,
    fail_kind: Mutex<Option<ErrorKind>>,
}

impl FakeComments {
    pub fn new(comments: Vec<Comment>) -> Self {
        Self {
            comments: Mutex::new(comments),
            fail_kind: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, kind: ErrorKind) {
        *self.fail_kind.lock().unwrap() = Some(kind);
    }

    fn failure(&self) -> Option<ApiError> {
        self.fail_kind.lock().unwrap().map(induced)
    }
}

#[async_trait]
impl CommentsApi for FakeComments {
    async fn all(&self) -> Result<Vec<Comment>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let comments = self.comments.lock().unwrap().clone();
        if comments.is_empty() {
            return Err(not_found("No hay comentarios"));
        }
        Ok(comments)
    }

    async fn by_product(&self, product_id: ProductId) -> Result<Vec<Comment>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.product_id == product_id)
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay comentarios"));
        }
        Ok(matches)
    }

    async fn by_user(&self, user_id: UserId) -> Result<Vec<Comment>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<Comment> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay comentarios"));
        }
        Ok(matches)
    }

    async fn create(&self, form: &CommentForm) -> Result<Comment, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut comments = self.comments.lock().unwrap();
        let next = comments.iter().map(|c| c.id.as_i32()).max().unwrap_or(0) + 1;
        let created = Comment {
            id: CommentId::new(next),
            product_id: form.product_id.unwrap_or(ProductId::new(0)),
            user_id: form.user_id.unwrap_or(UserId::new(0)),
            text: form.text.clone(),
            created_at: None,
            user_name: None,
            user_lastname: None,
            product_type: None,
        };
        comments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: CommentId, form: &CommentForm) -> Result<(), ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found("Comentario no encontrado"))?;
        comment.text = form.text.clone();
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> Result<(), ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| c.id != id);
        if comments.len() == before {
            return Err(not_found("Comentario no encontrado"));
        }
        Ok(())
    }
}

/// Images port over an in-memory list.
pub struct FakeImages {
    images: Mutex<Vec<ImageRecord>>,
    fail_kind: Mutex<Option<ErrorKind>>,
}

impl FakeImages {
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self {
            images: Mutex::new(images),
            fail_kind: Mutex::new(None),
        }
    }

    pub fn fail_with(&self, kind: ErrorKind) {
        *self.fail_kind.lock().unwrap() = Some(kind);
    }

    fn failure(&self) -> Option<ApiError> {
        self.fail_kind.lock().unwrap().map(induced)
    }
}

#[async_trait]
impl ImagesApi for FakeImages {
    async fn by_product(&self, product_id: ProductId) -> Result<Vec<ImageRecord>, ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let matches: Vec<ImageRecord> = self
            .images
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect();
        if matches.is_empty() {
            return Err(not_found("No hay imágenes"));
        }
        Ok(matches)
    }

    async fn upload(&self, product_id: ProductId, file: ImageUpload) -> Result<(), ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut images = self.images.lock().unwrap();
        let next = images.iter().map(|i| i.id.as_i32()).max().unwrap_or(0) + 1;
        images.push(ImageRecord {
            id: ImageId::new(next),
            product_id,
            url: format!("https://cdn.example.com/{}", file.file_name),
        });
        Ok(())
    }

    async fn delete(&self, id: ImageId) -> Result<(), ApiError> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        let mut images = self.images.lock().unwrap();
        let before = images.len();
        images.retain(|i| i.id != id);
        if images.len() == before {
            return Err(not_found("Imagen no encontrada"));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthApi for FakeAuth {
    async fn register(&self, _form: &RegisterForm) -> Result<RegisterOutcome, ApiError> {
        Ok(RegisterOutcome {
            success: true,
            message: Some("Usuario creado correctamente".to_owned()),
        })
    }

    async fn login(&self, form: &LoginForm) -> Result<String, ApiError> {
        if form.password == self.password {
            Ok(self.token.clone())
        } else {
            Err(backend(
                ErrorKind::Unauthorized,
                401,
                Some("Contraseña incorrecta"),
            ))
        }
    }
}
