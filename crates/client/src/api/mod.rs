//! REST transport for the storefront backend.
//!
//! # Architecture
//!
//! - One shared `reqwest::Client` behind an `Arc` inner struct
//! - The backend is source of truth - no local sync, direct API calls
//! - Per-entity operations live behind the [`ports`] traits; the
//!   [`RestClient`] implements all of them
//! - Every call is a single round trip: no retries, no caching
//!
//! # Error translation
//!
//! Error bodies are probed for a `message` field, then the
//! locale-specific `mensaje` - that fallback chain runs exactly once,
//! here. The resulting [`BackendError`] carries a typed
//! [`ErrorKind`](crate::error::ErrorKind) so no caller ever string-matches
//! a message (the historical "ya está en el carrito" probe is folded into
//! [`ErrorKind::DuplicateCartItem`](crate::error::ErrorKind)).

pub mod auth;
pub mod cart;
pub mod comments;
pub mod evaluations;
pub mod images;
pub mod ports;
pub mod products;
pub mod users;

pub use ports::{
    AuthApi, CartApi, CommentsApi, EvaluationsApi, ImagesApi, ProductsApi, RegisterOutcome,
    UsersApi,
};

use std::sync::{Arc, PoisonError, RwLock};

use reqwest::{Method, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, BackendError, ErrorKind};

/// Message the backend sends when a product is added twice. Matched once,
/// here, and surfaced as `ErrorKind::DuplicateCartItem` everywhere else.
const DUPLICATE_CART_MESSAGE: &str = "ya está en el carrito";

/// Error payload shape used by the backend.
///
/// Newer endpoints answer `{"message": ...}`, older ones
/// `{"mensaje": ...}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    mensaje: Option<String>,
}

/// Client for the storefront REST API.
///
/// Cheaply cloneable; all clones share the HTTP connection pool and the
/// bearer credential.
#[derive(Clone)]
pub struct RestClient {
    inner: Arc<RestClientInner>,
}

struct RestClientInner {
    http: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
}

impl RestClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(RestClientInner {
                http,
                base_url: config.api_url.clone(),
                token: RwLock::new(None),
            }),
        })
    }

    /// Install the bearer credential sent with subsequent requests.
    pub fn set_token(&self, token: SecretString) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Drop the bearer credential.
    pub fn clear_token(&self) {
        *self
            .inner
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Whether a credential is currently installed.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        // Base URLs are validated at config time; a join can still fail on
        // a malformed path, which is a programming error we surface as a
        // request error rather than panicking.
        self.inner.base_url.join(path).map_err(|e| {
            ApiError::Backend(BackendError {
                kind: ErrorKind::Invalid,
                status: 0,
                message: Some(format!("invalid request path {path}: {e}")),
            })
        })
    }

    fn builder(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let builder = self.inner.http.request(method, url);
        let token = self
            .inner
            .token
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = self
            .builder(Method::GET, url)
            .query(query)
            .send()
            .await?;
        read_json(response).await
    }

    pub(crate) async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self.builder(Method::POST, url).json(body).send().await?;
        read_json(response).await
    }

    pub(crate) async fn post_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self.builder(Method::POST, url).json(body).send().await?;
        read_unit(response).await
    }

    pub(crate) async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path)?;
        debug!(%url, "PUT");
        let response = self.builder(Method::PUT, url).json(body).send().await?;
        read_json(response).await
    }

    pub(crate) async fn put_unit<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%url, "PUT");
        let response = self.builder(Method::PUT, url).json(body).send().await?;
        read_unit(response).await
    }

    pub(crate) async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%url, "DELETE");
        let response = self.builder(Method::DELETE, url).send().await?;
        read_unit(response).await
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        debug!(%url, "POST multipart");
        let response = self
            .builder(Method::POST, url)
            .multipart(form)
            .send()
            .await?;
        read_unit(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(translate_error(status, &text).into());
    }

    serde_json::from_str(&text).map_err(|e| {
        tracing::error!(
            status = %status,
            body = %text.chars().take(500).collect::<String>(),
            "unexpected response body"
        );
        ApiError::Parse(e)
    })
}

async fn read_unit(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let text = response.text().await?;
    Err(translate_error(status, &text).into())
}

/// Translate a non-success response into a typed [`BackendError`].
///
/// This is the only place that inspects error message content.
pub(crate) fn translate_error(status: StatusCode, body: &str) -> BackendError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.mensaje));

    let kind = if message
        .as_deref()
        .is_some_and(|m| m.contains(DUPLICATE_CART_MESSAGE))
    {
        ErrorKind::DuplicateCartItem
    } else {
        match status {
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
            StatusCode::FORBIDDEN => ErrorKind::Forbidden,
            s if s.is_server_error() => ErrorKind::Server,
            _ => ErrorKind::Invalid,
        }
    };

    BackendError {
        kind,
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_prefers_message_over_mensaje() {
        let err = translate_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "primero", "mensaje": "segundo"}"#,
        );
        assert_eq!(err.message.as_deref(), Some("primero"));
        assert_eq!(err.kind, ErrorKind::Invalid);
    }

    #[test]
    fn test_translate_falls_back_to_mensaje() {
        let err = translate_error(StatusCode::BAD_REQUEST, r#"{"mensaje": "segundo"}"#);
        assert_eq!(err.message.as_deref(), Some("segundo"));
    }

    #[test]
    fn test_translate_no_message_fields() {
        let err = translate_error(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail": "x"}"#);
        assert!(err.message.is_none());
        assert_eq!(err.kind, ErrorKind::Server);
    }

    #[test]
    fn test_translate_non_json_body() {
        let err = translate_error(StatusCode::BAD_GATEWAY, "<html>502</html>");
        assert!(err.message.is_none());
        assert_eq!(err.kind, ErrorKind::Server);
    }

    #[test]
    fn test_translate_not_found() {
        let err = translate_error(StatusCode::NOT_FOUND, r#"{"message": "No hay productos"}"#);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message.as_deref(), Some("No hay productos"));
    }

    #[test]
    fn test_translate_unauthorized_and_forbidden() {
        assert_eq!(
            translate_error(StatusCode::UNAUTHORIZED, "{}").kind,
            ErrorKind::Unauthorized
        );
        assert_eq!(
            translate_error(StatusCode::FORBIDDEN, "{}").kind,
            ErrorKind::Forbidden
        );
    }

    #[test]
    fn test_translate_duplicate_cart_item() {
        let err = translate_error(
            StatusCode::BAD_REQUEST,
            r#"{"message": "El producto ya está en el carrito"}"#,
        );
        assert_eq!(err.kind, ErrorKind::DuplicateCartItem);
        assert_eq!(
            err.message.as_deref(),
            Some("El producto ya está en el carrito")
        );
    }
}
