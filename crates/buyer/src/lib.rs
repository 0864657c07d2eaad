//! Supply Stall Buyer - the buyer's side of the marketplace.
//!
//! # Architecture
//!
//! Everything here is synchronous, in-memory state owned by one session.
//! Each manager owns its collection outright and is only changed through
//! `&mut self` methods; nothing is shared between sessions.
//!
//! # Modules
//!
//! - [`cart`] - Items the buyer intends to purchase, with quantities and totals
//! - [`wishlist`] - Items saved for later, independent of the cart
//! - [`search`] - Substring search over the catalog and the browse state machine
//! - [`orders`] - Past orders and reordering
//! - [`review`] - Review drafts for delivered orders
//! - [`session`] - [`BuyerSession`], which ties the above together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod error;
pub mod orders;
pub mod review;
pub mod search;
pub mod session;
pub mod wishlist;

pub use cart::{Cart, CartLine, CheckoutSummary};
pub use error::{BuyerError, Result};
pub use orders::{BuyerOrder, OrderHistory, OrderLine, ReorderOutcome};
pub use review::{ReviewDraft, ReviewError, SubmittedReview};
pub use search::{BrowseMode, BrowseState, SearchHit, SearchResult, search};
pub use session::{BuyerSession, BuyerTab};
pub use wishlist::Wishlist;
