//! Product form, inventory, orders and stats on the seller dashboard.

#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;

use supply_stall_core::{ListingId, OrderNumber, OrderStatus};
use supply_stall_integration_tests::product_form;
use supply_stall_seller::{
    ProductForm, SellerDashboard, SellerError, SellerInventory, placeholder_image,
};

fn listed_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

// =============================================================================
// Listings
// =============================================================================

#[test]
fn test_add_fills_defaults() {
    let mut inventory = SellerInventory::new();
    let listing = inventory.add(&product_form("Carrots"), listed_on()).unwrap();

    assert_eq!(listing.id, ListingId::new(1));
    assert_eq!(listing.price, Decimal::new(250, 2));
    assert_eq!(listing.origin, "Not specified");
    assert_eq!(listing.min_order_quantity, 1);
    assert_eq!(listing.expiry_days, None);
    assert_eq!(listing.image, placeholder_image("Carrots"));
    assert_eq!(listing.rating_label(), "No reviews");
    assert!(listing.is_active);
}

#[test]
fn test_ids_never_reused_after_delete() {
    let mut dashboard = SellerDashboard::demo();
    dashboard.delete_product(ListingId::new(3)).unwrap();

    let listing = dashboard
        .add_product(&product_form("Leeks"), listed_on())
        .unwrap();
    assert_eq!(listing.id, ListingId::new(4));
}

#[test]
fn test_rejected_form_changes_nothing() {
    let mut dashboard = SellerDashboard::demo();
    let form = ProductForm {
        price: "cheap".to_string(),
        ..product_form("Leeks")
    };

    assert!(matches!(
        dashboard.add_product(&form, listed_on()),
        Err(SellerError::InvalidNumber { field: "price", .. })
    ));
    assert_eq!(dashboard.inventory().len(), 3);

    let listing = dashboard
        .add_product(&product_form("Leeks"), listed_on())
        .unwrap();
    assert_eq!(listing.id, ListingId::new(4));
}

#[test]
fn test_missing_required_field() {
    let mut inventory = SellerInventory::new();
    let form = ProductForm {
        description: "   ".to_string(),
        ..product_form("Kale")
    };
    let err = inventory.add(&form, listed_on()).unwrap_err();
    assert_eq!(err, SellerError::MissingField("description"));
    assert!(inventory.is_empty());
}

#[test]
fn test_edit_round_trip_keeps_listing_stable() {
    let mut dashboard = SellerDashboard::demo();
    let original = dashboard.inventory().get(ListingId::new(2)).unwrap().clone();

    let mut form = ProductForm::from_listing(&original);
    form.stock = "275".to_string();
    form.image = String::new();
    let updated = dashboard.update_product(ListingId::new(2), &form).unwrap();

    assert_eq!(updated.stock, 275);
    assert_eq!(updated.price, original.price);
    assert_eq!(updated.image, original.image);
    assert_eq!(updated.rating, original.rating);
    assert_eq!(updated.created_date, original.created_date);
}

#[test]
fn test_update_unknown_listing() {
    let mut dashboard = SellerDashboard::demo();
    assert_eq!(
        dashboard.update_product(ListingId::new(42), &product_form("Leeks")),
        Err(SellerError::UnknownProduct(ListingId::new(42)))
    );
}

// =============================================================================
// Orders & Stats
// =============================================================================

#[test]
fn test_ship_pending_order_once() {
    let mut dashboard = SellerDashboard::demo();
    let number = OrderNumber::new("ORD-001");

    let order = dashboard.mark_shipped(&number).unwrap();
    assert_eq!(order.status, OrderStatus::Shipped);
    assert!(matches!(
        dashboard.mark_shipped(&number),
        Err(SellerError::InvalidTransition { .. })
    ));
    assert_eq!(dashboard.orders().pending().count(), 0);
}

#[test]
fn test_stats_follow_inventory_changes() {
    let mut dashboard = SellerDashboard::demo();
    let before = dashboard.stats();
    assert_eq!(before.active_products, 3);
    assert_eq!(before.revenue, Decimal::from(200));

    dashboard
        .add_product(&product_form("Leeks"), listed_on())
        .unwrap();
    dashboard.delete_product(ListingId::new(1)).unwrap();

    let after = dashboard.stats();
    assert_eq!(after.active_products, 3);
    assert_eq!(after.total_orders, 2);
    // Onions 4.6 and peppers 4.7; the new listing is unrated.
    assert_eq!(after.average_rating, Some(Decimal::new(47, 1)));
}

// =============================================================================
// Reviews
// =============================================================================

#[test]
fn test_reviews_tab_lists_customer_reviews() {
    let dashboard = SellerDashboard::demo();
    let reviews = dashboard.reviews();
    assert_eq!(reviews.len(), 1);

    let review = reviews.iter().next().unwrap();
    assert_eq!(review.product, "Premium Tomatoes");
    assert_eq!(review.buyer_business, "Maria's Taco Stand");
    assert_eq!(review.buyer, "Street Tacos Co.");
    assert_eq!(review.rating.stars(), 5);
    assert!(review.text.starts_with("Excellent quality tomatoes!"));
    assert!(review.photo.is_some());
    assert_eq!(review.date_label(), "January 10, 2024");
}

#[test]
fn test_reviews_survive_listing_changes() {
    let mut dashboard = SellerDashboard::demo();
    dashboard.delete_product(ListingId::new(1)).unwrap();
    assert_eq!(
        dashboard.reviews().for_product("Premium Tomatoes").count(),
        1
    );
}
