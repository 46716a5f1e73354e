//! Cart envelopes.

use tienda_core::{CartItemId, ProductId};

use super::Envelope;
use crate::cart::{Cart, CartError, CartLine};
use crate::error::ErrorKind;

/// Envelope layer over the [`Cart`] store.
#[derive(Clone)]
pub struct CartAdapter {
    cart: Cart,
}

impl CartAdapter {
    #[must_use]
    pub const fn new(cart: Cart) -> Self {
        Self { cart }
    }

    /// Fetch the enriched cart lines.
    pub async fn items(&self) -> Envelope<Vec<CartLine>> {
        match self.cart.refresh().await {
            Ok(lines) => Envelope::data(lines),
            Err(err) => Envelope::failed(&err, "Error al cargar el carrito"),
        }
    }

    /// Add a product to the cart.
    pub async fn add(&self, product_id: ProductId, quantity: i32) -> Envelope<()> {
        match self.cart.add(product_id, quantity).await {
            Ok(()) => Envelope::done("Producto agregado al carrito"),
            Err(err) => fail(&err, "Error al agregar al carrito"),
        }
    }

    /// Change a line's quantity.
    pub async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Envelope<()> {
        match self.cart.set_quantity(id, quantity).await {
            Ok(()) => Envelope::done("Cantidad actualizada"),
            Err(err) => fail(&err, "Error al actualizar cantidad"),
        }
    }

    /// Remove a line.
    pub async fn remove(&self, id: CartItemId) -> Envelope<()> {
        match self.cart.remove(id).await {
            Ok(()) => Envelope::done("Producto eliminado del carrito"),
            Err(err) => fail(&err, "Error al eliminar del carrito"),
        }
    }
}

fn fail(err: &CartError, default: &str) -> Envelope<()> {
    match err {
        CartError::Rejected(message) => Envelope::rejected(ErrorKind::Invalid, message.clone()),
        CartError::Api(api) => Envelope::failed(api, default),
    }
}
