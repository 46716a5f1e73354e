//! Product catalog cache.
//!
//! Holds the in-memory product list the views render. Every fetch
//! replaces the list with the server's answer; a not-found response on a
//! list operation means "no matches" and becomes an empty list, never an
//! error. Mutations (admin create/update/delete) hit the server and then
//! re-fetch the full list - consistency over latency, no optimistic
//! updates.

use std::sync::{Arc, PoisonError, RwLock};

use tienda_core::{Product, ProductId};

use crate::api::ProductsApi;
use crate::error::ApiError;
use crate::forms::ProductForm;

/// The catalog store.
///
/// Cheaply cloneable; all clones share the same list. The list is only
/// written by the methods here, and readers always see a complete
/// server answer.
#[derive(Clone)]
pub struct Catalog {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    api: Arc<dyn ProductsApi>,
    products: RwLock<Vec<Product>>,
    current: RwLock<Option<Product>>,
}

impl Catalog {
    /// Create a catalog store over the given products port.
    #[must_use]
    pub fn new(api: Arc<dyn ProductsApi>) -> Self {
        Self {
            inner: Arc::new(CatalogInner {
                api,
                products: RwLock::new(Vec::new()),
                current: RwLock::new(None),
            }),
        }
    }

    /// Replace the list with every product.
    ///
    /// # Errors
    ///
    /// Not-found becomes an empty list; any other failure propagates.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let products = normalize_not_found(self.inner.api.all().await)?;
        Ok(self.publish(products))
    }

    /// Fetch a single product and remember it as the current one.
    ///
    /// # Errors
    ///
    /// Propagates every failure, including not-found - a missing single
    /// record is an error, unlike an empty list.
    pub async fn fetch_by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        let product = self.inner.api.by_id(id).await?;
        *self
            .inner
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(product.clone());
        Ok(product)
    }

    /// Replace the list with the products matching a name search.
    ///
    /// # Errors
    ///
    /// Not-found becomes an empty list; any other failure propagates.
    pub async fn search(&self, term: &str) -> Result<Vec<Product>, ApiError> {
        let products = normalize_not_found(self.inner.api.search(term).await)?;
        Ok(self.publish(products))
    }

    /// Replace the list with the products of one type.
    ///
    /// # Errors
    ///
    /// Not-found becomes an empty list; any other failure propagates.
    pub async fn fetch_by_type(&self, product_type: &str) -> Result<Vec<Product>, ApiError> {
        let products = normalize_not_found(self.inner.api.by_type(product_type).await)?;
        Ok(self.publish(products))
    }

    /// Replace the list with the products of one size.
    ///
    /// # Errors
    ///
    /// Not-found becomes an empty list; any other failure propagates.
    pub async fn fetch_by_size(&self, size: &str) -> Result<Vec<Product>, ApiError> {
        let products = normalize_not_found(self.inner.api.by_size(size).await)?;
        Ok(self.publish(products))
    }

    /// Create a product, then re-fetch the full list.
    ///
    /// # Errors
    ///
    /// Propagates creation and re-fetch failures.
    pub async fn create(&self, form: &ProductForm) -> Result<Product, ApiError> {
        let product = self.inner.api.create(form).await?;
        self.fetch_all().await?;
        Ok(product)
    }

    /// Update a product, then re-fetch the full list.
    ///
    /// # Errors
    ///
    /// Propagates update and re-fetch failures.
    pub async fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, ApiError> {
        let product = self.inner.api.update(id, form).await?;
        self.fetch_all().await?;
        Ok(product)
    }

    /// Delete a product, then re-fetch the full list.
    ///
    /// # Errors
    ///
    /// Propagates deletion and re-fetch failures.
    pub async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.inner.api.delete(id).await?;
        self.fetch_all().await?;
        Ok(())
    }

    /// Snapshot of the cached list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.inner
            .products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the current (last individually fetched) product.
    #[must_use]
    pub fn current(&self) -> Option<Product> {
        self.inner
            .current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn publish(&self, products: Vec<Product>) -> Vec<Product> {
        *self
            .inner
            .products
            .write()
            .unwrap_or_else(PoisonError::into_inner) = products.clone();
        products
    }
}

fn normalize_not_found(result: Result<Vec<Product>, ApiError>) -> Result<Vec<Product>, ApiError> {
    match result {
        Err(err) if err.is_not_found() => Ok(Vec::new()),
        other => other,
    }
}
