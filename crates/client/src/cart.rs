//! Cart aggregation.
//!
//! The backend's cart lines carry only `{id, id_product, quantity}`; the
//! display fields come from the product each line points at. `refresh`
//! fetches the raw lines, then fetches every referenced product
//! concurrently and joins the results before publishing, so readers only
//! ever observe a fully joined list. A line whose product fetch fails is
//! kept with its raw fields - one bad product reference never fails the
//! whole cart.
//!
//! Mutations re-derive state by calling `refresh` afterwards
//! (read-after-write via re-fetch, no local patching).

use std::sync::{Arc, PoisonError, RwLock};

use futures::future::join_all;
use rust_decimal::Decimal;
use thiserror::Error;
use tienda_core::{CartItem, CartItemId, Product, ProductId};
use tracing::warn;

use crate::api::{CartApi, ProductsApi};
use crate::error::ApiError;
use crate::validate;

/// A cart line, enriched with product metadata when available.
///
/// The display fields are `None` on a line whose product fetch failed;
/// totals treat a missing price as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// Line ID.
    pub id: CartItemId,
    /// Referenced product.
    pub product_id: ProductId,
    /// Units in the cart.
    pub quantity: i32,
    /// Product name at enrichment time.
    pub product_name: Option<String>,
    /// Unit price at enrichment time.
    pub price: Option<Decimal>,
    /// Garment size.
    pub size: Option<String>,
    /// Product type.
    pub product_type: Option<String>,
    /// Units the store has in stock; feeds the quantity guard.
    pub stock: Option<i32>,
}

impl CartLine {
    /// A line carrying only the raw fields.
    #[must_use]
    pub const fn raw(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            product_name: None,
            price: None,
            size: None,
            product_type: None,
            stock: None,
        }
    }

    /// A line merged with its product's display fields.
    #[must_use]
    pub fn enriched(item: CartItem, product: &Product) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            quantity: item.quantity,
            product_name: Some(product.name.clone()),
            price: Some(product.price),
            size: Some(product.size.clone()),
            product_type: Some(product.product_type.clone()),
            stock: Some(product.quantity),
        }
    }

    /// Price times quantity, with a missing price counting as zero.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.price.unwrap_or_default() * Decimal::from(self.quantity)
    }
}

/// Sum of `price * quantity` over the lines, missing prices as zero.
#[must_use]
pub fn total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::subtotal).sum()
}

/// Sum of the quantities over the lines.
#[must_use]
pub fn count(lines: &[CartLine]) -> i32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Errors from cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// The quantity change failed the client-side guard; nothing was
    /// sent. Carries the guard's message.
    #[error("{0}")]
    Rejected(String),

    /// The backend rejected the operation (duplicate adds arrive here
    /// with `ErrorKind::DuplicateCartItem`).
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// The cart store.
///
/// Cheaply cloneable; all clones share the same enriched line list.
#[derive(Clone)]
pub struct Cart {
    inner: Arc<CartInner>,
}

struct CartInner {
    cart: Arc<dyn CartApi>,
    products: Arc<dyn ProductsApi>,
    lines: RwLock<Vec<CartLine>>,
}

impl Cart {
    /// Create a cart store over the given cart and products ports.
    #[must_use]
    pub fn new(cart: Arc<dyn CartApi>, products: Arc<dyn ProductsApi>) -> Self {
        Self {
            inner: Arc::new(CartInner {
                cart,
                products,
                lines: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Re-fetch the raw lines and enrich each with its product.
    ///
    /// Enrichment fetches run concurrently and are joined before the
    /// list is published. A per-line failure is logged and that line is
    /// kept with raw fields only.
    ///
    /// # Errors
    ///
    /// Propagates a failure to fetch the raw lines themselves (an empty
    /// cart reported as not-found is normalized to an empty list).
    pub async fn refresh(&self) -> Result<Vec<CartLine>, ApiError> {
        let items = match self.inner.cart.items().await {
            Ok(items) => items,
            Err(err) if err.is_not_found() => Vec::new(),
            Err(err) => return Err(err),
        };

        let lines = join_all(items.into_iter().map(|item| {
            let products = Arc::clone(&self.inner.products);
            async move {
                match products.by_id(item.product_id).await {
                    Ok(product) => CartLine::enriched(item, &product),
                    Err(err) => {
                        warn!(
                            product_id = %item.product_id,
                            error = %err,
                            "cart line enrichment failed; keeping raw fields"
                        );
                        CartLine::raw(item)
                    }
                }
            }
        }))
        .await;

        *self
            .inner
            .lines
            .write()
            .unwrap_or_else(PoisonError::into_inner) = lines.clone();
        Ok(lines)
    }

    /// Add a product to the cart, then refresh.
    ///
    /// # Errors
    ///
    /// Fails the guard for a non-positive quantity; a duplicate add is
    /// rejected by the server and surfaces as
    /// [`ErrorKind::DuplicateCartItem`](crate::error::ErrorKind).
    pub async fn add(&self, product_id: ProductId, quantity: i32) -> Result<(), CartError> {
        let check = validate::quantity(quantity, None);
        if let Some(message) = check.first_message() {
            return Err(CartError::Rejected(message.to_owned()));
        }

        self.inner.cart.add(product_id, quantity).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Change a line's quantity, then refresh.
    ///
    /// Guarded client-side: rejected when `quantity <= 0`, or when the
    /// line's stock is known and exceeded. The server stays the
    /// authority either way.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Rejected`] from the guard, or the API error.
    pub async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), CartError> {
        let stock = self.line(id).and_then(|line| line.stock);
        let check = validate::quantity(quantity, stock);
        if let Some(message) = check.first_message() {
            return Err(CartError::Rejected(message.to_owned()));
        }

        self.inner.cart.set_quantity(id, quantity).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Remove a line, then refresh.
    ///
    /// # Errors
    ///
    /// Propagates removal and refresh failures.
    pub async fn remove(&self, id: CartItemId) -> Result<(), CartError> {
        self.inner.cart.remove(id).await?;
        self.refresh().await?;
        Ok(())
    }

    /// Snapshot of the enriched lines.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        self.inner
            .lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Cart total over the current lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        total(&self.lines())
    }

    /// Number of units across the current lines.
    #[must_use]
    pub fn count(&self) -> i32 {
        count(&self.lines())
    }

    fn line(&self, id: CartItemId) -> Option<CartLine> {
        self.inner
            .lines
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|line| line.id == id)
            .cloned()
    }
}
