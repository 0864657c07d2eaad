//! Buyer-side error type.
//!
//! Checkout on an empty cart is the one failure a buyer sees as a blocking
//! message. The other variants come from the session guard in front of the
//! cart and from review drafts.

use thiserror::Error;

use supply_stall_core::{BusinessId, ItemId, OrderNumber};

use crate::review::ReviewError;

/// Errors raised by buyer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuyerError {
    /// Checkout attempted with nothing in the cart.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// The item id is not in the catalog.
    #[error("Unknown item: {0}")]
    UnknownItem(ItemId),

    /// The business id is not in the catalog.
    #[error("Unknown business: {0}")]
    UnknownBusiness(BusinessId),

    /// The item exists but cannot be ordered right now.
    #[error("{0} is out of stock")]
    OutOfStock(String),

    /// The order number is not in the buyer's history.
    #[error("Unknown order: {0}")]
    UnknownOrder(OrderNumber),

    /// A review could not be started or submitted.
    #[error("Review error: {0}")]
    Review(#[from] ReviewError),
}

/// Result type alias for `BuyerError`.
pub type Result<T> = std::result::Result<T, BuyerError>;
