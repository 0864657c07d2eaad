//! Selling units for catalog items.

use serde::{Deserialize, Serialize};

/// Error returned when a unit name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid unit: {0}")]
pub struct UnitError(pub String);

/// The unit an item is priced and sold in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Kg,
    Liter,
    Piece,
    Dozen,
    Pack,
    Box,
    Bag,
}

impl Unit {
    /// Every unit, in the order sellers pick from.
    pub const ALL: [Self; 7] = [
        Self::Kg,
        Self::Liter,
        Self::Piece,
        Self::Dozen,
        Self::Pack,
        Self::Box,
        Self::Bag,
    ];

    /// Lowercase name used in price labels.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Liter => "liter",
            Self::Piece => "piece",
            Self::Dozen => "dozen",
            Self::Pack => "pack",
            Self::Box => "box",
            Self::Bag => "bag",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == needle)
            .ok_or_else(|| UnitError(s.to_string()))
    }
}
