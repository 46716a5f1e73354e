//! Pure form validation.
//!
//! Stateless field-level checks run before anything is submitted; no
//! network or storage access happens here and nothing panics. Every
//! function returns a [`Validation`] carrying a field-to-message map, with
//! the storefront's Spanish messages preserved verbatim.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::forms::{CommentForm, EvaluationForm, ImageUpload, LoginForm, ProductForm, RegisterForm};

/// Maximum accepted image upload size (5 MiB).
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// MIME types accepted for product images.
pub const VALID_IMAGE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

/// Result of validating a form payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: BTreeMap<&'static str, String>,
}

impl Validation {
    /// Whether the payload passed every check.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The message recorded for a field, if any.
    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// All field errors, ordered by field name.
    pub fn errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// First recorded message, for single-line surfacing.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.errors.values().next().map(String::as_str)
    }

    fn add(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_owned());
    }
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Validate a registration payload.
#[must_use]
pub fn register(form: &RegisterForm) -> Validation {
    let mut v = Validation::default();

    if trimmed_len(&form.name) < 2 {
        v.add("name", "El nombre debe tener al menos 2 caracteres");
    }
    if trimmed_len(&form.lastname) < 2 {
        v.add("lastname", "El apellido debe tener al menos 2 caracteres");
    }
    if !is_valid_email(&form.email) {
        v.add("email", "El email no es válido");
    }
    if form.password.chars().count() < 6 {
        v.add("password", "La contraseña debe tener al menos 6 caracteres");
    }
    if form.password != form.confirm_password {
        v.add("confirm_password", "Las contraseñas no coinciden");
    }

    v
}

/// Validate a login payload.
#[must_use]
pub fn login(form: &LoginForm) -> Validation {
    let mut v = Validation::default();

    if !is_valid_email(&form.email) {
        v.add("email", "El email no es válido");
    }
    if form.password.chars().count() < 6 {
        v.add("password", "La contraseña debe tener al menos 6 caracteres");
    }

    v
}

/// Validate a product payload (admin create/update).
#[must_use]
pub fn product(form: &ProductForm) -> Validation {
    let mut v = Validation::default();

    if trimmed_len(&form.name) < 3 {
        v.add("name", "El nombre debe tener al menos 3 caracteres");
    }
    if trimmed_len(&form.description) < 10 {
        v.add("description", "La descripción debe tener al menos 10 caracteres");
    }
    if form.quantity < 0 {
        v.add("quantity", "La cantidad no puede ser negativa");
    }
    if form.price <= Decimal::ZERO {
        v.add("price", "El precio debe ser mayor a 0");
    }
    if trimmed_len(&form.size) == 0 {
        v.add("size", "Debe especificar una talla");
    }
    if trimmed_len(&form.product_type) == 0 {
        v.add("product_type", "Debe seleccionar un tipo");
    }

    v
}

/// Validate a comment payload.
#[must_use]
pub fn comment(form: &CommentForm) -> Validation {
    let mut v = Validation::default();

    let len = trimmed_len(&form.text);
    if len < 3 {
        v.add("comment", "El comentario debe tener al menos 3 caracteres");
    } else if len > 500 {
        v.add("comment", "El comentario no puede exceder 500 caracteres");
    }
    if form.product_id.is_none() {
        v.add("id_product", "Debe seleccionar un producto");
    }
    if form.user_id.is_none() {
        v.add("id_user", "Debe estar autenticado");
    }

    v
}

/// Validate an evaluation payload.
#[must_use]
pub fn evaluation(form: &EvaluationForm) -> Validation {
    let mut v = Validation::default();

    if form.assessment < 1 || form.assessment > 5 {
        v.add("assessment", "La calificación debe ser entre 1 y 5");
    }
    if form.product_id.is_none() {
        v.add("id_product", "Debe seleccionar un producto");
    }
    if form.user_id.is_none() {
        v.add("id_user", "Debe estar autenticado");
    }

    v
}

/// Validate a shipping address.
#[must_use]
pub fn address(address: &str) -> Validation {
    let mut v = Validation::default();

    if trimmed_len(address) < 5 {
        v.add("address", "La dirección debe tener al menos 5 caracteres");
    }

    v
}

/// Validate a staged image upload.
///
/// Pass `None` when no file was selected at all.
#[must_use]
pub fn image(file: Option<&ImageUpload>) -> Validation {
    let mut v = Validation::default();

    let Some(file) = file else {
        v.add("file", "Debe seleccionar un archivo");
        return v;
    };

    if !VALID_IMAGE_TYPES.contains(&file.content_type.as_str()) {
        v.add("file_type", "El archivo debe ser una imagen (JPG, PNG, GIF, WEBP)");
    }
    if file.size() > MAX_IMAGE_BYTES {
        v.add("file_size", "La imagen no debe superar los 5MB");
    }

    v
}

/// Client-side guard for cart quantity changes.
///
/// Rejects non-positive quantities, and quantities exceeding the stock
/// when the stock is known (an unenriched line skips the stock check).
/// This is a UX guard only; the server remains the authority.
#[must_use]
pub fn quantity(quantity: i32, stock: Option<i32>) -> Validation {
    let mut v = Validation::default();

    if quantity <= 0 {
        v.add("quantity", "La cantidad debe ser mayor a 0");
    }
    if let Some(stock) = stock
        && quantity > stock
    {
        v.add("quantity", "No hay suficiente stock disponible");
    }

    v
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tienda_core::{ProductId, UserId};

    fn valid_register() -> RegisterForm {
        RegisterForm {
            name: "Laura".to_owned(),
            lastname: "Mejia".to_owned(),
            email: "laura@example.com".to_owned(),
            password: "secreta".to_owned(),
            confirm_password: "secreta".to_owned(),
            ..RegisterForm::default()
        }
    }

    #[test]
    fn test_register_valid() {
        assert!(register(&valid_register()).is_valid());
    }

    #[test]
    fn test_register_short_password() {
        let form = RegisterForm {
            password: "corta".to_owned(),
            confirm_password: "corta".to_owned(),
            ..valid_register()
        };
        let v = register(&form);
        assert!(!v.is_valid());
        assert_eq!(
            v.error("password"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
        assert!(v.error("email").is_none());
    }

    #[test]
    fn test_register_password_mismatch() {
        let form = RegisterForm {
            confirm_password: "distinta".to_owned(),
            ..valid_register()
        };
        let v = register(&form);
        assert_eq!(v.error("confirm_password"), Some("Las contraseñas no coinciden"));
    }

    #[test]
    fn test_register_trims_names() {
        let form = RegisterForm {
            name: "  L  ".to_owned(),
            ..valid_register()
        };
        let v = register(&form);
        assert_eq!(
            v.error("name"),
            Some("El nombre debe tener al menos 2 caracteres")
        );
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("user.name+tag@domain.co.uk"));
        assert!(!is_valid_email("sin-arroba"));
        assert!(!is_valid_email("user@dominio"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_login_rules() {
        let v = login(&LoginForm {
            email: "laura@example.com".to_owned(),
            password: "secreta".to_owned(),
        });
        assert!(v.is_valid());

        let v = login(&LoginForm {
            email: "malo".to_owned(),
            password: "12345".to_owned(),
        });
        assert_eq!(v.error("email"), Some("El email no es válido"));
        assert_eq!(
            v.error("password"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
    }

    fn valid_product() -> ProductForm {
        ProductForm {
            name: "Camiseta".to_owned(),
            description: "Camiseta de algodon, corte clasico".to_owned(),
            quantity: 10,
            price: Decimal::from(35_000),
            size: "M".to_owned(),
            product_type: "camiseta".to_owned(),
        }
    }

    #[test]
    fn test_product_valid() {
        assert!(product(&valid_product()).is_valid());
    }

    #[test]
    fn test_product_zero_quantity_is_valid() {
        let form = ProductForm {
            quantity: 0,
            ..valid_product()
        };
        assert!(product(&form).is_valid());
    }

    #[test]
    fn test_product_rules() {
        let form = ProductForm {
            name: "ab".to_owned(),
            description: "corta".to_owned(),
            quantity: -1,
            price: Decimal::ZERO,
            size: "  ".to_owned(),
            product_type: String::new(),
        };
        let v = product(&form);
        assert_eq!(v.error("name"), Some("El nombre debe tener al menos 3 caracteres"));
        assert_eq!(
            v.error("description"),
            Some("La descripción debe tener al menos 10 caracteres")
        );
        assert_eq!(v.error("quantity"), Some("La cantidad no puede ser negativa"));
        assert_eq!(v.error("price"), Some("El precio debe ser mayor a 0"));
        assert_eq!(v.error("size"), Some("Debe especificar una talla"));
        assert_eq!(v.error("product_type"), Some("Debe seleccionar un tipo"));
    }

    fn valid_comment() -> CommentForm {
        CommentForm {
            text: "Muy buena calidad".to_owned(),
            product_id: Some(ProductId::new(1)),
            user_id: Some(UserId::new(2)),
        }
    }

    #[test]
    fn test_comment_bounds() {
        assert!(comment(&valid_comment()).is_valid());

        let v = comment(&CommentForm {
            text: "ab".to_owned(),
            ..valid_comment()
        });
        assert_eq!(
            v.error("comment"),
            Some("El comentario debe tener al menos 3 caracteres")
        );

        let v = comment(&CommentForm {
            text: "x".repeat(500),
            ..valid_comment()
        });
        assert!(v.is_valid());

        let v = comment(&CommentForm {
            text: "x".repeat(501),
            ..valid_comment()
        });
        assert_eq!(
            v.error("comment"),
            Some("El comentario no puede exceder 500 caracteres")
        );
    }

    #[test]
    fn test_comment_references() {
        let v = comment(&CommentForm {
            product_id: None,
            user_id: None,
            ..valid_comment()
        });
        assert_eq!(v.error("id_product"), Some("Debe seleccionar un producto"));
        assert_eq!(v.error("id_user"), Some("Debe estar autenticado"));
    }

    #[test]
    fn test_evaluation_range() {
        for assessment in 1..=5 {
            let v = evaluation(&EvaluationForm {
                assessment,
                product_id: Some(ProductId::new(1)),
                user_id: Some(UserId::new(2)),
            });
            assert!(v.is_valid(), "assessment {assessment} should be valid");
        }

        for assessment in [0, 6, -1] {
            let v = evaluation(&EvaluationForm {
                assessment,
                product_id: Some(ProductId::new(1)),
                user_id: Some(UserId::new(2)),
            });
            assert_eq!(
                v.error("assessment"),
                Some("La calificación debe ser entre 1 y 5")
            );
        }
    }

    #[test]
    fn test_address_rules() {
        // "Calle 1" is 7 characters, valid
        assert!(address("Calle 1").is_valid());
        // "Cal" is 3 characters, invalid
        let v = address("Cal");
        assert_eq!(
            v.error("address"),
            Some("La dirección debe tener al menos 5 caracteres")
        );
        // Trimming applies
        assert!(!address("  ab  ").is_valid());
    }

    fn png(bytes: usize) -> ImageUpload {
        ImageUpload {
            file_name: "foto.png".to_owned(),
            content_type: "image/png".to_owned(),
            bytes: vec![0; bytes],
        }
    }

    #[test]
    fn test_image_missing_file() {
        let v = image(None);
        assert_eq!(v.error("file"), Some("Debe seleccionar un archivo"));
    }

    #[test]
    fn test_image_type_and_size() {
        assert!(image(Some(&png(1024))).is_valid());
        assert!(image(Some(&png(MAX_IMAGE_BYTES))).is_valid());

        let v = image(Some(&png(MAX_IMAGE_BYTES + 1)));
        assert_eq!(v.error("file_size"), Some("La imagen no debe superar los 5MB"));

        let pdf = ImageUpload {
            file_name: "doc.pdf".to_owned(),
            content_type: "application/pdf".to_owned(),
            bytes: vec![0; 10],
        };
        let v = image(Some(&pdf));
        assert_eq!(
            v.error("file_type"),
            Some("El archivo debe ser una imagen (JPG, PNG, GIF, WEBP)")
        );
    }

    #[test]
    fn test_quantity_guard() {
        assert!(quantity(1, Some(5)).is_valid());
        assert!(quantity(5, Some(5)).is_valid());
        assert!(quantity(3, None).is_valid());

        let v = quantity(0, Some(5));
        assert_eq!(v.error("quantity"), Some("La cantidad debe ser mayor a 0"));

        let v = quantity(6, Some(5));
        assert_eq!(
            v.error("quantity"),
            Some("No hay suficiente stock disponible")
        );
    }
}
