//! Seller dashboard: business profile, listings, orders and headline stats.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use tracing::instrument;

use supply_stall_core::{Business, BusinessId, ListingId, OrderNumber, Rating};

use crate::error::Result;
use crate::inventory::{Listing, SellerInventory};
use crate::orders::{SellerOrder, SellerOrders};
use crate::product_form::ProductForm;
use crate::reviews::SellerReviews;

/// Headline numbers on the overview tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Listings buyers can see.
    pub active_products: usize,
    pub total_orders: usize,
    /// Sum of all order amounts.
    pub revenue: Decimal,
    /// Mean rating of listings that have been rated, to one decimal place.
    pub average_rating: Option<Decimal>,
}

impl DashboardStats {
    #[must_use]
    pub fn compute(inventory: &SellerInventory, orders: &SellerOrders) -> Self {
        let (sum, rated) = inventory
            .iter()
            .filter(|listing| listing.rating.is_rated())
            .fold((Decimal::ZERO, 0u32), |(sum, count), listing| {
                (sum + listing.rating.value(), count + 1)
            });

        let average_rating = (rated > 0).then(|| {
            (sum / Decimal::from(rated))
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        });

        Self {
            active_products: inventory.active().count(),
            total_orders: orders.len(),
            revenue: orders.revenue(),
            average_rating,
        }
    }
}

/// Everything one seller's dashboard owns.
#[derive(Debug, Clone, Serialize)]
pub struct SellerDashboard {
    business: Business,
    inventory: SellerInventory,
    orders: SellerOrders,
    reviews: SellerReviews,
}

impl SellerDashboard {
    #[must_use]
    pub const fn new(
        business: Business,
        inventory: SellerInventory,
        orders: SellerOrders,
        reviews: SellerReviews,
    ) -> Self {
        Self {
            business,
            inventory,
            orders,
            reviews,
        }
    }

    /// Fresh Farm Supplies Co. with its demo listings, orders and reviews.
    #[must_use]
    pub fn demo() -> Self {
        let business = Business {
            id: BusinessId::new(1),
            name: "Fresh Farm Supplies Co.".to_string(),
            owner: "John Smith".to_string(),
            location: "California, USA".to_string(),
            description: "Premium organic vegetables and fresh produce supplier".to_string(),
            established: "2018".to_string(),
            rating: Rating::from_tenths(48),
            review_count: 156,
            total_orders: 650,
        };
        Self::new(
            business,
            SellerInventory::demo(),
            SellerOrders::demo(),
            SellerReviews::demo(),
        )
    }

    #[must_use]
    pub const fn business(&self) -> &Business {
        &self.business
    }

    #[must_use]
    pub const fn inventory(&self) -> &SellerInventory {
        &self.inventory
    }

    #[must_use]
    pub const fn orders(&self) -> &SellerOrders {
        &self.orders
    }

    /// Customer reviews of this seller's products.
    #[must_use]
    pub const fn reviews(&self) -> &SellerReviews {
        &self.reviews
    }

    #[must_use]
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.inventory, &self.orders)
    }

    /// Add a product listed today.
    ///
    /// # Errors
    ///
    /// Returns an error if the form does not validate.
    #[instrument(skip(self, form), fields(business = %self.business.name))]
    pub fn add_product(&mut self, form: &ProductForm, today: NaiveDate) -> Result<&Listing> {
        self.inventory.add(form, today)
    }

    /// Apply an edited form to a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown or the form does not validate.
    pub fn update_product(&mut self, id: ListingId, form: &ProductForm) -> Result<&Listing> {
        self.inventory.update(id, form)
    }

    /// Remove a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown.
    pub fn delete_product(&mut self, id: ListingId) -> Result<Listing> {
        self.inventory.delete(id)
    }

    /// Mark a pending order as shipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or not pending.
    pub fn mark_shipped(&mut self, number: &OrderNumber) -> Result<&SellerOrder> {
        self.orders.mark_shipped(number)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SellerError;

    #[test]
    fn test_demo_stats() {
        let dashboard = SellerDashboard::demo();
        let stats = dashboard.stats();
        assert_eq!(stats.active_products, 3);
        assert_eq!(stats.total_orders, 2);
        assert_eq!(stats.revenue, Decimal::from(200));
        assert_eq!(stats.average_rating, Some(Decimal::new(47, 1)));
        assert!(dashboard.business().is_verified());
    }

    #[test]
    fn test_demo_reviews() {
        let dashboard = SellerDashboard::demo();
        let review = dashboard.reviews().iter().next().unwrap();
        assert_eq!(review.product, "Premium Tomatoes");
        assert_eq!(review.buyer, "Street Tacos Co.");
    }

    #[test]
    fn test_unrated_listings_do_not_drag_average() {
        let mut dashboard = SellerDashboard::demo();
        let form = ProductForm {
            name: "Red Onions".to_string(),
            category: "Vegetables".to_string(),
            price: "2".to_string(),
            unit: "kg".to_string(),
            stock: "80".to_string(),
            description: "Sharp red onions".to_string(),
            ..ProductForm::default()
        };
        dashboard
            .add_product(&form, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap())
            .unwrap();

        let stats = dashboard.stats();
        assert_eq!(stats.active_products, 4);
        assert_eq!(stats.average_rating, Some(Decimal::new(47, 1)));
    }

    #[test]
    fn test_empty_dashboard_has_no_average() {
        let stats = DashboardStats::compute(&SellerInventory::new(), &SellerOrders::default());
        assert_eq!(stats.active_products, 0);
        assert_eq!(stats.revenue, Decimal::ZERO);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn test_delete_updates_active_count() {
        let mut dashboard = SellerDashboard::demo();
        dashboard.delete_product(ListingId::new(2)).unwrap();
        assert_eq!(dashboard.stats().active_products, 2);
        assert_eq!(
            dashboard.delete_product(ListingId::new(2)),
            Err(SellerError::UnknownProduct(ListingId::new(2)))
        );
    }
}
