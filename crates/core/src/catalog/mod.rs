//! Catalog store: the read-only items and supplier businesses buyers browse.
//!
//! A [`Catalog`] keeps items and businesses in a stable order and offers
//! lookup by identifier plus linear scans. Nothing in the buyer or seller
//! crates mutates a catalog; sellers publish new listings by building a new
//! one.

mod demo;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{BusinessId, Category, CurrencyCode, ItemId, Price, Rating, Unit};

/// Order count at which a supplier earns the verified badge.
pub const VERIFIED_ORDER_THRESHOLD: u32 = 500;

/// Errors raised while assembling a catalog.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two items share an identifier.
    #[error("duplicate item id {0}")]
    DuplicateItem(ItemId),
    /// Two businesses share an identifier.
    #[error("duplicate business id {0}")]
    DuplicateBusiness(BusinessId),
    /// An item has a negative price.
    #[error("item {0} has a negative price")]
    NegativePrice(ItemId),
}

/// A purchasable raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Person running the supplying business.
    pub supplier: String,
    /// Name of the supplying business; matches [`Business::name`].
    pub business_name: String,
    pub category: Category,
    pub description: String,
    #[serde(default)]
    pub location: String,
    /// Price per [`Unit`], in the catalog currency.
    pub price: Decimal,
    pub unit: Unit,
    pub in_stock: bool,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub total_orders: u32,
}

impl Item {
    /// Whether the supplier behind this item has the verified badge.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.meets_order_threshold(VERIFIED_ORDER_THRESHOLD)
    }

    #[must_use]
    pub const fn meets_order_threshold(&self, threshold: u32) -> bool {
        self.total_orders >= threshold
    }
}

/// A supplier business grouping items by [`Item::business_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub owner: String,
    #[serde(default)]
    pub location: String,
    pub description: String,
    /// Year the business was established, as shown on its profile.
    #[serde(default)]
    pub established: String,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub total_orders: u32,
}

impl Business {
    /// Whether this business has the verified badge.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.meets_order_threshold(VERIFIED_ORDER_THRESHOLD)
    }

    #[must_use]
    pub const fn meets_order_threshold(&self, threshold: u32) -> bool {
        self.total_orders >= threshold
    }
}

/// Raw catalog contents as read from a file.
#[derive(Debug, Clone, Default, Deserialize)]
struct CatalogData {
    #[serde(default)]
    currency: CurrencyCode,
    #[serde(default)]
    businesses: Vec<Business>,
    #[serde(default)]
    items: Vec<Item>,
}

/// Ordered, read-only collection of items and businesses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData")]
pub struct Catalog {
    currency: CurrencyCode,
    businesses: Vec<Business>,
    items: Vec<Item>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        Self::with_currency(data.currency, data.businesses, data.items)
    }
}

impl Catalog {
    /// Build a catalog in the default currency.
    ///
    /// # Errors
    ///
    /// Returns an error if identifiers repeat or a price is negative.
    pub fn new(businesses: Vec<Business>, items: Vec<Item>) -> Result<Self, CatalogError> {
        Self::with_currency(CurrencyCode::default(), businesses, items)
    }

    /// Build a catalog priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if identifiers repeat or a price is negative.
    pub fn with_currency(
        currency: CurrencyCode,
        businesses: Vec<Business>,
        items: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        for (index, business) in businesses.iter().enumerate() {
            if businesses
                .iter()
                .skip(index + 1)
                .any(|other| other.id == business.id)
            {
                return Err(CatalogError::DuplicateBusiness(business.id));
            }
        }

        for (index, item) in items.iter().enumerate() {
            if item.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(item.id));
            }
            if items.iter().skip(index + 1).any(|other| other.id == item.id) {
                return Err(CatalogError::DuplicateItem(item.id));
            }
        }

        Ok(Self {
            currency,
            businesses,
            items,
        })
    }

    /// The built-in mock catalog: four supplier businesses and six items.
    #[must_use]
    pub fn demo() -> Self {
        demo::catalog()
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Items in catalog order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Businesses in catalog order.
    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    #[must_use]
    pub fn business(&self, id: BusinessId) -> Option<&Business> {
        self.businesses.iter().find(|business| business.id == id)
    }

    /// Find a business by its exact name.
    #[must_use]
    pub fn business_named(&self, name: &str) -> Option<&Business> {
        self.businesses.iter().find(|business| business.name == name)
    }

    /// Items offered by the business called `business_name`, in catalog order.
    pub fn items_by_business<'a>(
        &'a self,
        business_name: &'a str,
    ) -> impl Iterator<Item = &'a Item> + 'a {
        self.items
            .iter()
            .filter(move |item| item.business_name == business_name)
    }

    /// Items currently available to order.
    pub fn in_stock(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.in_stock)
    }

    /// Price of `item` in this catalog's currency.
    #[must_use]
    pub const fn price_of(&self, item: &Item) -> Price {
        Price::new(item.price, self.currency)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, business_name: &str) -> Item {
        Item {
            id: ItemId::new(id),
            name: name.to_string(),
            supplier: "Owner".to_string(),
            business_name: business_name.to_string(),
            category: Category::Vegetables,
            description: String::new(),
            location: String::new(),
            price: Decimal::new(100, 2),
            unit: Unit::Kg,
            in_stock: true,
            rating: Rating::default(),
            review_count: 0,
            total_orders: 0,
        }
    }

    #[test]
    fn test_new_rejects_duplicate_items() {
        let result = Catalog::new(Vec::new(), vec![item(1, "A", "X"), item(1, "B", "X")]);
        assert_eq!(result, Err(CatalogError::DuplicateItem(ItemId::new(1))));
    }

    #[test]
    fn test_new_rejects_negative_price() {
        let mut cheap = item(3, "A", "X");
        cheap.price = Decimal::new(-1, 0);
        assert!(matches!(
            Catalog::new(Vec::new(), vec![cheap]),
            Err(CatalogError::NegativePrice(_))
        ));
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::new(Vec::new(), vec![item(1, "A", "X"), item(2, "B", "Y")]).unwrap();
        assert_eq!(catalog.item(ItemId::new(2)).unwrap().name, "B");
        assert!(catalog.item(ItemId::new(9)).is_none());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_items_by_business_preserves_order() {
        let catalog = Catalog::new(
            Vec::new(),
            vec![item(1, "A", "X"), item(2, "B", "Y"), item(3, "C", "X")],
        )
        .unwrap();
        let names: Vec<_> = catalog
            .items_by_business("X")
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, ["A", "C"]);
    }

    #[test]
    fn test_verified_threshold() {
        let mut listed = item(1, "A", "X");
        listed.total_orders = 499;
        assert!(!listed.is_verified());
        listed.total_orders = 500;
        assert!(listed.is_verified());
        assert!(!listed.meets_order_threshold(600));
    }

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.businesses().len(), 4);
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.items()[0].name, "Premium Tomatoes");
        assert_eq!(catalog.in_stock().count(), 5);
        assert!(catalog.business_named("Dairy Direct Ltd.").unwrap().is_verified());
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "items": [
                {"id": 1, "name": "Rice", "supplier": "Raj", "business_name": "Grain",
                 "category": "Grains", "description": "", "price": "3.20", "unit": "kg",
                 "in_stock": true},
                {"id": 1, "name": "Rice", "supplier": "Raj", "business_name": "Grain",
                 "category": "Grains", "description": "", "price": "3.20", "unit": "kg",
                 "in_stock": true}
            ]
        }"#;
        assert!(serde_json::from_str::<Catalog>(json).is_err());
    }

    #[test]
    fn test_price_of_uses_catalog_currency() {
        let catalog =
            Catalog::with_currency(CurrencyCode::EUR, Vec::new(), vec![item(1, "A", "X")]).unwrap();
        let price = catalog.price_of(&catalog.items()[0]);
        assert_eq!(price.display(), "€1.00");
    }
}
