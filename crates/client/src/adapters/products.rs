//! Product catalog envelopes.

use tienda_core::{Product, ProductId};

use super::Envelope;
use crate::catalog::Catalog;
use crate::forms::ProductForm;

/// Envelope layer over the [`Catalog`] store.
#[derive(Clone)]
pub struct ProductsAdapter {
    catalog: Catalog,
}

impl ProductsAdapter {
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// Fetch the full catalog.
    pub async fn all(&self) -> Envelope<Vec<Product>> {
        match self.catalog.fetch_all().await {
            Ok(products) => Envelope::data(products),
            Err(err) => Envelope::failed(&err, "Error al cargar productos"),
        }
    }

    /// Fetch one product.
    pub async fn by_id(&self, id: ProductId) -> Envelope<Product> {
        match self.catalog.fetch_by_id(id).await {
            Ok(product) => Envelope::data(product),
            Err(err) => Envelope::failed(&err, "Error al cargar el producto"),
        }
    }

    /// Search the catalog by name.
    pub async fn search(&self, term: &str) -> Envelope<Vec<Product>> {
        match self.catalog.search(term).await {
            Ok(products) => Envelope::data(products),
            Err(err) => Envelope::failed(&err, "Error al buscar productos"),
        }
    }

    /// Filter the catalog by product type.
    pub async fn by_type(&self, product_type: &str) -> Envelope<Vec<Product>> {
        match self.catalog.fetch_by_type(product_type).await {
            Ok(products) => Envelope::data(products),
            Err(err) => Envelope::failed(&err, "Error al filtrar productos por tipo"),
        }
    }

    /// Filter the catalog by size.
    pub async fn by_size(&self, size: &str) -> Envelope<Vec<Product>> {
        match self.catalog.fetch_by_size(size).await {
            Ok(products) => Envelope::data(products),
            Err(err) => Envelope::failed(&err, "Error al filtrar productos por talla"),
        }
    }

    /// Create a product (admin).
    pub async fn create(&self, form: &ProductForm) -> Envelope<Product> {
        match self.catalog.create(form).await {
            Ok(product) => Envelope::created(product, "Producto creado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al crear producto"),
        }
    }

    /// Update a product (admin).
    pub async fn update(&self, id: ProductId, form: &ProductForm) -> Envelope<Product> {
        match self.catalog.update(id, form).await {
            Ok(product) => Envelope::created(product, "Producto actualizado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al actualizar producto"),
        }
    }

    /// Delete a product (admin).
    pub async fn delete(&self, id: ProductId) -> Envelope<()> {
        match self.catalog.delete(id).await {
            Ok(()) => Envelope::done("Producto eliminado exitosamente"),
            Err(err) => Envelope::failed(&err, "Error al eliminar producto"),
        }
    }
}
