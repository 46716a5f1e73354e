//! Product records as served by the catalog endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A catalog product.
///
/// Invariants enforced server-side (and checked by the client-side
/// validators before submission): `quantity >= 0`, `price > 0`.
///
/// The backend's type column is spelled `tipe`; that spelling is part of
/// the wire contract, so the serde rename keeps it off the Rust surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID (`id_product` on the wire).
    #[serde(rename = "id_product")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long description.
    pub description: String,
    /// Units in stock.
    pub quantity: i32,
    /// Unit price in Colombian pesos.
    pub price: Decimal,
    /// Garment size (e.g. "M", "38").
    pub size: String,
    /// Product type (`tipe` on the wire, e.g. "camiseta").
    #[serde(rename = "tipe")]
    pub product_type: String,
    /// Primary image URL, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Whether at least one unit is in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_wire_names() {
        let json = r#"{
            "id_product": 3,
            "name": "Camiseta basica",
            "description": "Camiseta de algodon, corte clasico",
            "quantity": 12,
            "price": 35000,
            "size": "M",
            "tipe": "camiseta"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(3));
        assert_eq!(product.product_type, "camiseta");
        assert_eq!(product.price, Decimal::from(35_000));
        assert!(product.image.is_none());
        assert!(product.in_stock());
    }

    #[test]
    fn test_out_of_stock() {
        let json = r#"{
            "id_product": 1,
            "name": "Gorra",
            "description": "Gorra ajustable",
            "quantity": 0,
            "price": 20000,
            "size": "U",
            "tipe": "accesorio"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert!(!product.in_stock());
    }
}
