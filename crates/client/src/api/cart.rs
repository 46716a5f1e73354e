//! Cart endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tienda_core::{CartItem, CartItemId, ProductId};

use super::ports::CartApi;
use super::RestClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct CartBody {
    #[serde(default)]
    carrito: Vec<CartItem>,
}

#[derive(Debug, Serialize)]
struct AddBody {
    id_product: ProductId,
    quantity: i32,
}

#[derive(Debug, Serialize)]
struct QuantityBody {
    quantity: i32,
}

#[async_trait]
impl CartApi for RestClient {
    async fn items(&self) -> Result<Vec<CartItem>, ApiError> {
        let body: CartBody = self.get_json("cart/", &[]).await?;
        Ok(body.carrito)
    }

    async fn add(&self, product_id: ProductId, quantity: i32) -> Result<(), ApiError> {
        self.post_unit(
            "cart/",
            &AddBody {
                id_product: product_id,
                quantity,
            },
        )
        .await
    }

    async fn set_quantity(&self, id: CartItemId, quantity: i32) -> Result<(), ApiError> {
        self.put_unit(&format!("cart/{id}"), &QuantityBody { quantity })
            .await
    }

    async fn remove(&self, id: CartItemId) -> Result<(), ApiError> {
        self.delete_unit(&format!("cart/{id}")).await
    }
}
