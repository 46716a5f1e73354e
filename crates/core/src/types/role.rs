//! User roles.

use serde::{Deserialize, Serialize};

/// Role carried in the token claims and on user records.
///
/// The backend spells the variants capitalised (`"Customer"`, `"Admin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Store administrator; may manage products, users, and reviews.
    Admin,
}

impl Role {
    /// Whether this role grants access to the admin operations.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Customer => write!(f, "Customer"),
            Self::Admin => write!(f, "Admin"),
        }
    }
}
