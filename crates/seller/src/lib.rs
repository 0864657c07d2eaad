//! Supply Stall Seller - the supplier's side of the marketplace.
//!
//! # Modules
//!
//! - [`product_form`] - Add/edit product form input and validation
//! - [`inventory`] - Product listings with monotonically allocated ids
//! - [`orders`] - Incoming orders and the pending to shipped transition
//! - [`reviews`] - Customer reviews of the seller's products
//! - [`dashboard`] - Business profile, headline stats and the owning [`SellerDashboard`]

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod dashboard;
pub mod error;
pub mod inventory;
pub mod orders;
pub mod product_form;
pub mod reviews;

pub use dashboard::{DashboardStats, SellerDashboard};
pub use error::{Result, SellerError};
pub use inventory::{Listing, SellerInventory};
pub use orders::{SellerOrder, SellerOrders};
pub use product_form::{ProductForm, ValidProduct, placeholder_image};
pub use reviews::{SellerReview, SellerReviews};
