//! Customer reviews shown on the seller's reviews tab.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use supply_stall_core::StarRating;

const FIVE_STARS: StarRating = match StarRating::new(5) {
    Ok(rating) => rating,
    Err(_) => panic!("5 is a valid star rating"),
};

/// A buyer's review of one of the seller's products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerReview {
    /// Product name as listed when the review was written.
    pub product: String,
    /// Stall or restaurant that left the review.
    pub buyer_business: String,
    /// Contact name for the buyer.
    pub buyer: String,
    pub rating: StarRating,
    pub text: String,
    pub photo: Option<String>,
    pub date: NaiveDate,
}

impl SellerReview {
    /// Date as "January 10, 2024".
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Reviews received, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerReviews {
    reviews: Vec<SellerReview>,
}

impl SellerReviews {
    #[must_use]
    pub const fn new(reviews: Vec<SellerReview>) -> Self {
        Self { reviews }
    }

    /// The review on the demo seller's dashboard.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![SellerReview {
            product: "Premium Tomatoes".to_string(),
            buyer_business: "Maria's Taco Stand".to_string(),
            buyer: "Street Tacos Co.".to_string(),
            rating: FIVE_STARS,
            text: "Excellent quality tomatoes! Fresh, juicy, and perfect for our tacos. \
                   Will definitely order again. Fast delivery and great packaging."
                .to_string(),
            photo: Some("/placeholder.svg?height=60&width=60&text=Review".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
        }])
    }

    /// Reviews left on the named product.
    pub fn for_product<'a>(&'a self, product: &'a str) -> impl Iterator<Item = &'a SellerReview> {
        self.reviews
            .iter()
            .filter(move |review| review.product == product)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SellerReview> {
        self.reviews.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}
