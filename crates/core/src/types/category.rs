//! Product categories.

use serde::{Deserialize, Serialize};

/// Error returned when a category name is not recognised.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid category: {0}")]
pub struct CategoryError(pub String);

/// Category a raw material is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Vegetables,
    Fruits,
    Dairy,
    Meat,
    Grains,
    Spices,
    Oils,
    Beverages,
    Frozen,
    Other,
}

impl Category {
    pub const ALL: [Self; 10] = [
        Self::Vegetables,
        Self::Fruits,
        Self::Dairy,
        Self::Meat,
        Self::Grains,
        Self::Spices,
        Self::Oils,
        Self::Beverages,
        Self::Frozen,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetables => "Vegetables",
            Self::Fruits => "Fruits",
            Self::Dairy => "Dairy",
            Self::Meat => "Meat",
            Self::Grains => "Grains",
            Self::Spices => "Spices",
            Self::Oils => "Oils",
            Self::Beverages => "Beverages",
            Self::Frozen => "Frozen",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}
