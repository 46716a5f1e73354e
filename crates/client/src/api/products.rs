//! Product catalog endpoints.

use async_trait::async_trait;
use serde::Deserialize;
use tienda_core::{Product, ProductId};

use super::ports::ProductsApi;
use super::RestClient;
use crate::error::ApiError;
use crate::forms::ProductForm;

#[derive(Debug, Deserialize)]
struct ProductListBody {
    #[serde(default)]
    productos: Vec<Product>,
}

/// The filter endpoints reuse the singular `producto` key for their lists.
#[derive(Debug, Deserialize)]
struct FilteredListBody {
    #[serde(default)]
    producto: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductBody {
    producto: Product,
}

#[async_trait]
impl ProductsApi for RestClient {
    async fn all(&self) -> Result<Vec<Product>, ApiError> {
        let body: ProductListBody = self.get_json("products/", &[]).await?;
        Ok(body.productos)
    }

    async fn by_id(&self, id: ProductId) -> Result<Product, ApiError> {
        let body: ProductBody = self.get_json(&format!("products/id/{id}"), &[]).await?;
        Ok(body.producto)
    }

    async fn search(&self, term: &str) -> Result<Vec<Product>, ApiError> {
        let body: FilteredListBody = self.get_json("products/name", &[("name", term)]).await?;
        Ok(body.producto)
    }

    async fn by_type(&self, product_type: &str) -> Result<Vec<Product>, ApiError> {
        let body: FilteredListBody = self
            .get_json("products/tipe", &[("tipe", product_type)])
            .await?;
        Ok(body.producto)
    }

    async fn by_size(&self, size: &str) -> Result<Vec<Product>, ApiError> {
        let body: FilteredListBody = self.get_json("products/size", &[("size", size)]).await?;
        Ok(body.producto)
    }

    async fn create(&self, form: &ProductForm) -> Result<Product, ApiError> {
        let body: ProductBody = self.post_json("products/", form).await?;
        Ok(body.producto)
    }

    async fn update(&self, id: ProductId, form: &ProductForm) -> Result<Product, ApiError> {
        let body: ProductBody = self.put_json(&format!("products/{id}"), form).await?;
        Ok(body.producto)
    }

    async fn delete(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete_unit(&format!("products/{id}")).await
    }
}
