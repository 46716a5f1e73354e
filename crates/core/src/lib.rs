//! Tienda Core - Shared types library.
//!
//! This crate provides the domain types used across the Tienda components:
//! - `client` - SDK talking to the remote storefront REST API
//! - `cli` - Command-line front-end driving the SDK
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! struct carries the serde mappings for the backend's wire field names
//! (`id_product`, `tipe`, `created_at`, ...), so the other crates never
//! re-declare the contract.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, the `Role` enum, and the entity structs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
