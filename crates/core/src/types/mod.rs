//! Core types for Supply Stall.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod rating;
pub mod status;
pub mod unit;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{CurrencyCode, MONEY_SCALE, Price, round_money};
pub use rating::{Rating, RatingError, StarRating};
pub use status::*;
pub use unit::{Unit, UnitError};
