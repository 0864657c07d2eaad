//! CLI command implementations.
//!
//! Each command builds a serializable report from the library crates and
//! hands it to [`crate::output::Printer`].

pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod search;
pub mod seller;
pub mod wishlist;

use thiserror::Error;

use supply_stall_buyer::BuyerError;
use supply_stall_seller::SellerError;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No business with this exact name.
    #[error("Unknown business: {0}")]
    UnknownBusiness(String),

    #[error(transparent)]
    Buyer(#[from] BuyerError),

    #[error(transparent)]
    Seller(#[from] SellerError),

    /// JSON output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}
