//! Raw cart line items.

use serde::{Deserialize, Serialize};

use crate::{CartItemId, ProductId};

/// A cart line as returned by `GET /cart/`.
///
/// Only the reference fields live here; display fields (name, price,
/// stock) are merged on by the client at read time from the product
/// record the line points at.
///
/// Invariant (server-enforced): `0 < quantity <= product stock`, one line
/// per product per user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Line ID (`id_cart_item` on the wire).
    #[serde(rename = "id_cart_item")]
    pub id: CartItemId,
    /// Product this line refers to.
    #[serde(rename = "id_product")]
    pub product_id: ProductId,
    /// Units of the product in the cart.
    pub quantity: i32,
}
