//! User account endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tienda_core::{User, UserId};

use super::ports::UsersApi;
use super::RestClient;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
struct UserListBody {
    #[serde(default)]
    usuarios: Vec<User>,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    usuario: User,
}

/// The email lookup reuses the singular `usuario` key for its list.
#[derive(Debug, Deserialize)]
struct EmailLookupBody {
    #[serde(default)]
    usuario: Vec<User>,
}

#[derive(Debug, Serialize)]
struct EmailBody<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct AddressBody<'a> {
    address: &'a str,
}

#[async_trait]
impl UsersApi for RestClient {
    async fn all(&self) -> Result<Vec<User>, ApiError> {
        let body: UserListBody = self.get_json("users", &[]).await?;
        Ok(body.usuarios)
    }

    async fn active(&self) -> Result<User, ApiError> {
        let body: UserBody = self.get_json("users/active", &[]).await?;
        Ok(body.usuario)
    }

    async fn by_id(&self, id: UserId) -> Result<User, ApiError> {
        let body: UserBody = self.get_json(&format!("users/id/{id}"), &[]).await?;
        Ok(body.usuario)
    }

    async fn by_email(&self, email: &str) -> Result<Vec<User>, ApiError> {
        let body: EmailLookupBody = self.post_json("users/email", &EmailBody { email }).await?;
        Ok(body.usuario)
    }

    async fn update_address(&self, address: &str) -> Result<User, ApiError> {
        let body: UserBody = self.put_json("users/", &AddressBody { address }).await?;
        Ok(body.usuario)
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.delete_unit(&format!("users/{id}")).await
    }
}
