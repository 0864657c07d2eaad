//! Supply Stall Core - Shared types and catalog store.
//!
//! This crate provides the types used across all Supply Stall components:
//! - `buyer` - Cart, wishlist, search and order history for buyers
//! - `seller` - Listing management and incoming orders for sellers
//! - `cli` - Command-line driver for both sides
//!
//! # Architecture
//!
//! The core crate contains only types and in-memory data - no I/O, no
//! logging, no persistence. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, units, ratings and statuses
//! - [`catalog`] - Read-only catalog of items and supplier businesses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{Business, Catalog, CatalogError, Item, VERIFIED_ORDER_THRESHOLD};
pub use types::*;
