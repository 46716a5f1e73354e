//! Core types for the Tienda storefront client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod image;
pub mod product;
pub mod review;
pub mod role;
pub mod user;

pub use cart::CartItem;
pub use id::*;
pub use image::ImageRecord;
pub use product::Product;
pub use review::{Comment, Evaluation};
pub use role::Role;
pub use user::{Identity, User};
