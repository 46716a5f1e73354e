//! User records and the cached identity projection.

use serde::{Deserialize, Serialize};

use crate::{Role, UserId};

/// A user account as returned by the `/users` endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User ID (`id_user` on the wire).
    #[serde(rename = "id_user")]
    pub id: UserId,
    /// First name.
    pub name: String,
    /// Last name.
    pub lastname: String,
    /// Email address.
    pub email: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Shipping address, once the user has set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Locally cached projection of the authenticated user.
///
/// Derived from the login token's claims and persisted alongside the
/// credential; cleared on logout. The server record stays authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// User ID.
    pub id: UserId,
    /// Account role.
    pub role: Role,
    /// Email address.
    pub email: String,
    /// First name.
    pub name: String,
}

impl Identity {
    /// Whether this identity holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
