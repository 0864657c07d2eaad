//! Aggregate ratings and individual star scores.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors produced when building a rating.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// Aggregate rating outside `0..=5`.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
    /// Star score outside `1..=5`.
    #[error("stars must be between 1 and 5 (got {0})")]
    InvalidStars(u8),
}

/// Average rating of an item or business, in `[0, 5]`.
///
/// Zero means "no reviews yet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    pub const MAX: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

    /// Create a rating, rejecting values outside `[0, 5]`.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError::OutOfRange`] for negative values or values above 5.
    pub fn new(value: Decimal) -> Result<Self, RatingError> {
        if value < Decimal::ZERO || value > Self::MAX {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Create a rating from tenths of a star (`48` -> 4.8), clamped to 5.0.
    #[must_use]
    pub fn from_tenths(tenths: u8) -> Self {
        Self(Decimal::new(i64::from(tenths.min(50)), 1))
    }

    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Whether anyone has rated this yet.
    #[must_use]
    pub fn is_rated(&self) -> bool {
        !self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = RatingError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for Decimal {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// A single reviewer's score, one to five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// # Errors
    ///
    /// Returns [`RatingError::InvalidStars`] unless `stars` is in `1..=5`.
    pub const fn new(stars: u8) -> Result<Self, RatingError> {
        if stars >= 1 && stars <= 5 {
            Ok(Self(stars))
        } else {
            Err(RatingError::InvalidStars(stars))
        }
    }

    #[must_use]
    pub const fn stars(&self) -> u8 {
        self.0
    }

    /// Label shown next to the stars, e.g. "1 star" or "4 stars".
    #[must_use]
    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 star".to_string()
        } else {
            format!("{} stars", self.0)
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingError;

    fn try_from(stars: u8) -> Result<Self, Self::Error> {
        Self::new(stars)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(Rating::new(Decimal::ZERO).is_ok());
        assert!(Rating::new(Decimal::from(5)).is_ok());
        assert!(matches!(
            Rating::new(Decimal::new(51, 1)),
            Err(RatingError::OutOfRange(_))
        ));
        assert!(Rating::new(Decimal::new(-1, 1)).is_err());
    }

    #[test]
    fn test_rating_from_tenths_clamps() {
        assert_eq!(Rating::from_tenths(47).value(), Decimal::new(47, 1));
        assert_eq!(Rating::from_tenths(90).value(), Decimal::from(5));
    }

    #[test]
    fn test_rating_display_drops_trailing_zeros() {
        let rating = Rating::new(Decimal::new(480, 2)).unwrap();
        assert_eq!(rating.to_string(), "4.8");
        assert!(rating.is_rated());
        assert!(!Rating::default().is_rated());
    }

    #[test]
    fn test_rating_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Rating>("4.9").is_ok());
        assert!(serde_json::from_str::<Rating>("7").is_err());
    }

    #[test]
    fn test_star_rating() {
        assert!(matches!(StarRating::new(0), Err(RatingError::InvalidStars(0))));
        assert!(StarRating::new(6).is_err());
        assert_eq!(StarRating::new(1).unwrap().label(), "1 star");
        assert_eq!(StarRating::new(4).unwrap().label(), "4 stars");
    }
}
