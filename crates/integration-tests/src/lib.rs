//! Shared fixtures for the Supply Stall scenario tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p supply-stall-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `buyer_checkout` - Cart, wishlist and checkout through a buyer session
//! - `search_drill_down` - Search results and the browse state machine
//! - `buyer_reviews` - Order history, reordering and review drafts
//! - `seller_listings` - Product form, inventory, orders and stats

#![cfg_attr(not(test), forbid(unsafe_code))]

use rust_decimal::Decimal;

use supply_stall_core::{Business, BusinessId, Catalog, Category, Item, ItemId, Rating, Unit};
use supply_stall_seller::ProductForm;

/// A catalog item priced in cents.
#[must_use]
pub fn item(id: i64, name: &str, business: &str, cents: i64, in_stock: bool) -> Item {
    Item {
        id: ItemId::new(id),
        name: name.to_string(),
        supplier: "Test Supplier".to_string(),
        business_name: business.to_string(),
        category: Category::Vegetables,
        description: format!("{name} for testing"),
        location: String::new(),
        price: Decimal::new(cents, 2),
        unit: Unit::Kg,
        in_stock,
        rating: Rating::default(),
        review_count: 0,
        total_orders: 0,
    }
}

/// A business with no reviews or orders.
#[must_use]
pub fn business(id: i64, name: &str, owner: &str, description: &str) -> Business {
    Business {
        id: BusinessId::new(id),
        name: name.to_string(),
        owner: owner.to_string(),
        location: String::new(),
        description: description.to_string(),
        established: String::new(),
        rating: Rating::default(),
        review_count: 0,
        total_orders: 0,
    }
}

/// Tomatoes at 2.50/kg in stock and onions at 1.80/kg out of stock.
///
/// # Panics
///
/// Panics if the fixture data stops passing catalog validation.
#[must_use]
pub fn tomato_onion_catalog() -> Catalog {
    Catalog::new(
        vec![business(1, "Farm A", "Ann Farmer", "Vegetable grower")],
        vec![
            item(1, "Premium Tomatoes", "Farm A", 250, true),
            item(2, "Fresh Onions", "Farm A", 180, false),
        ],
    )
    .expect("valid fixture catalog")
}

/// A complete product form with no optional fields set.
#[must_use]
pub fn product_form(name: &str) -> ProductForm {
    ProductForm {
        name: name.to_string(),
        category: "Vegetables".to_string(),
        price: "2.50".to_string(),
        unit: "kg".to_string(),
        stock: "100".to_string(),
        description: format!("{name} from the test farm"),
        ..ProductForm::default()
    }
}
