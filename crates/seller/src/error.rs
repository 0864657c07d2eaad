//! Error types for seller operations.

use thiserror::Error;

use supply_stall_core::{CategoryError, ListingId, OrderNumber, OrderStatus, UnitError};

/// Errors raised while managing listings and orders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SellerError {
    /// A required product field was left blank.
    #[error("Please fill in all required fields! Missing: {0}")]
    MissingField(&'static str),

    /// A numeric product field did not parse.
    #[error("{field} must be a valid number (got \"{value}\")")]
    InvalidNumber { field: &'static str, value: String },

    /// Category is not one of the marketplace categories.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// Unit is not one of the marketplace units.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// No listing with this id.
    #[error("product not found: {0}")]
    UnknownProduct(ListingId),

    /// No order with this number.
    #[error("order not found: {0}")]
    UnknownOrder(OrderNumber),

    /// The order cannot move to the requested status.
    #[error("order {order} cannot go from {from} to {to}")]
    InvalidTransition {
        order: OrderNumber,
        from: OrderStatus,
        to: OrderStatus,
    },
}

/// Result type alias for seller operations.
pub type Result<T> = std::result::Result<T, SellerError>;
