//! The seller's product listings.

use chrono::NaiveDate;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use supply_stall_core::{Category, CurrencyCode, ListingId, Price, Rating, Unit};

use crate::error::{Result, SellerError};
use crate::product_form::{ProductForm, placeholder_image};

/// A product the seller offers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique listing ID.
    pub id: ListingId,
    pub name: String,
    pub category: Category,
    /// Price per unit.
    pub price: Decimal,
    pub unit: Unit,
    /// Units available.
    pub stock: u32,
    pub description: String,
    /// Where the product comes from (e.g., "California Farms").
    pub origin: String,
    /// Shelf life in days, if perishable.
    pub expiry_days: Option<u32>,
    pub min_order_quantity: u32,
    /// Image URL.
    pub image: String,
    /// Whether buyers can see the listing.
    pub is_active: bool,
    pub created_date: NaiveDate,
    /// Average buyer rating; zero until reviewed.
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub review_count: u32,
}

impl Listing {
    /// Price label such as "$2.50/kg".
    #[must_use]
    pub fn price_label(&self, currency: CurrencyCode) -> String {
        Price::new(self.price, currency).per_unit(self.unit)
    }

    /// Rating label: "4.8 (23 reviews)", or "No reviews" when unrated.
    #[must_use]
    pub fn rating_label(&self) -> String {
        if self.rating.is_rated() {
            format!("{} ({} reviews)", self.rating, self.review_count)
        } else {
            "No reviews".to_string()
        }
    }
}

/// All listings of one seller, in the order they were created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SellerInventory {
    listings: IndexMap<ListingId, Listing>,
    next_id: i64,
}

impl Default for SellerInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl SellerInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::with_listings(Vec::new())
    }

    /// Build an inventory from existing listings. New ids continue after the
    /// highest existing one.
    #[must_use]
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        let next_id = listings
            .iter()
            .map(|listing| listing.id.as_i64())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            listings: listings
                .into_iter()
                .map(|listing| (listing.id, listing))
                .collect(),
            next_id,
        }
    }

    /// The three listings of the demo seller.
    #[must_use]
    pub fn demo() -> Self {
        let created = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap_or_default();

        Self::with_listings(vec![
            Listing {
                id: ListingId::new(1),
                name: "Premium Tomatoes".to_string(),
                category: Category::Vegetables,
                price: Decimal::new(250, 2),
                unit: Unit::Kg,
                stock: 500,
                description: "Fresh, organic tomatoes perfect for street food preparation"
                    .to_string(),
                origin: "California Farms".to_string(),
                expiry_days: Some(7),
                min_order_quantity: 5,
                image: placeholder_image("Tomatoes"),
                is_active: true,
                created_date: created(1),
                rating: Rating::from_tenths(48),
                review_count: 23,
            },
            Listing {
                id: ListingId::new(2),
                name: "Fresh Onions".to_string(),
                category: Category::Vegetables,
                price: Decimal::new(180, 2),
                unit: Unit::Kg,
                stock: 300,
                description: "High-quality yellow onions, perfect for cooking".to_string(),
                origin: "Local Farms".to_string(),
                expiry_days: Some(14),
                min_order_quantity: 10,
                image: placeholder_image("Onions"),
                is_active: true,
                created_date: created(2),
                rating: Rating::from_tenths(46),
                review_count: 18,
            },
            Listing {
                id: ListingId::new(3),
                name: "Bell Peppers Mix".to_string(),
                category: Category::Vegetables,
                price: Decimal::new(420, 2),
                unit: Unit::Kg,
                stock: 150,
                description: "Colorful mix of red, yellow, and green bell peppers".to_string(),
                origin: "Greenhouse Grown".to_string(),
                expiry_days: Some(10),
                min_order_quantity: 3,
                image: placeholder_image("Peppers"),
                is_active: true,
                created_date: created(3),
                rating: Rating::from_tenths(47),
                review_count: 12,
            },
        ])
    }

    /// Create a listing from a validated form.
    ///
    /// The listing starts active and unrated.
    ///
    /// # Errors
    ///
    /// Returns an error if the form does not validate.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub fn add(&mut self, form: &ProductForm, created_date: NaiveDate) -> Result<&Listing> {
        let product = form.validate().inspect_err(|err| {
            warn!(error = %err, "product rejected");
        })?;

        let id = ListingId::new(self.next_id);
        self.next_id += 1;

        let listing = Listing {
            id,
            image: product.image_or_placeholder(),
            name: product.name,
            category: product.category,
            price: product.price,
            unit: product.unit,
            stock: product.stock,
            description: product.description,
            origin: product.origin,
            expiry_days: product.expiry_days,
            min_order_quantity: product.min_order_quantity,
            is_active: true,
            created_date,
            rating: Rating::default(),
            review_count: 0,
        };

        info!(%id, name = %listing.name, "product added");
        Ok(self.listings.entry(id).or_insert(listing))
    }

    /// Replace a listing's details from an edited form.
    ///
    /// A blank image keeps the current one. Rating, reviews, active flag and
    /// creation date are left alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown or the form does not validate.
    #[instrument(skip(self, form))]
    pub fn update(&mut self, id: ListingId, form: &ProductForm) -> Result<&Listing> {
        let Some(listing) = self.listings.get_mut(&id) else {
            warn!("update for unknown product");
            return Err(SellerError::UnknownProduct(id));
        };
        let product = form.validate().inspect_err(|err| {
            warn!(error = %err, "product update rejected");
        })?;

        if let Some(image) = product.image {
            listing.image = image;
        }
        listing.name = product.name;
        listing.category = product.category;
        listing.price = product.price;
        listing.unit = product.unit;
        listing.stock = product.stock;
        listing.description = product.description;
        listing.origin = product.origin;
        listing.expiry_days = product.expiry_days;
        listing.min_order_quantity = product.min_order_quantity;

        info!(name = %listing.name, "product updated");
        Ok(listing)
    }

    /// Remove a listing, returning it.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown.
    #[instrument(skip(self))]
    pub fn delete(&mut self, id: ListingId) -> Result<Listing> {
        let listing = self
            .listings
            .shift_remove(&id)
            .ok_or(SellerError::UnknownProduct(id))?;
        info!(name = %listing.name, "product deleted");
        Ok(listing)
    }

    /// Show or hide a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing is unknown.
    pub fn set_active(&mut self, id: ListingId, active: bool) -> Result<()> {
        let listing = self
            .listings
            .get_mut(&id)
            .ok_or(SellerError::UnknownProduct(id))?;
        listing.is_active = active;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.get(&id)
    }

    /// Listings buyers can see.
    pub fn active(&self) -> impl Iterator<Item = &Listing> {
        self.listings.values().filter(|listing| listing.is_active)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: "Spices".to_string(),
            price: "6.75".to_string(),
            unit: "pack".to_string(),
            stock: "40".to_string(),
            description: "Ground cumin".to_string(),
            ..ProductForm::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_demo_inventory() {
        let inventory = SellerInventory::demo();
        assert_eq!(inventory.len(), 3);
        let peppers = inventory.get(ListingId::new(3)).unwrap();
        assert_eq!(peppers.price_label(CurrencyCode::USD), "$4.20/kg");
        assert_eq!(peppers.rating_label(), "4.7 (12 reviews)");
        assert_eq!(
            peppers.image,
            "/placeholder.svg?height=100&width=100&text=Peppers"
        );
    }

    #[test]
    fn test_add_allocates_increasing_ids() {
        let mut inventory = SellerInventory::demo();
        let first = inventory.add(&form("Cumin"), today()).unwrap().id;
        let second = inventory.add(&form("Coriander"), today()).unwrap().id;
        assert_eq!(first, ListingId::new(4));
        assert_eq!(second, ListingId::new(5));

        inventory.delete(second).unwrap();
        let third = inventory.add(&form("Paprika"), today()).unwrap().id;
        assert_eq!(third, ListingId::new(6));
    }

    #[test]
    fn test_new_listing_defaults() {
        let mut inventory = SellerInventory::new();
        let listing = inventory.add(&form("Cumin"), today()).unwrap();
        assert_eq!(listing.id, ListingId::new(1));
        assert!(listing.is_active);
        assert_eq!(listing.origin, "Not specified");
        assert_eq!(listing.min_order_quantity, 1);
        assert_eq!(listing.rating_label(), "No reviews");
        assert_eq!(listing.created_date, today());
    }

    #[test]
    fn test_invalid_form_allocates_nothing() {
        let mut inventory = SellerInventory::new();
        let mut bad = form("Cumin");
        bad.description.clear();
        assert_eq!(
            inventory.add(&bad, today()),
            Err(SellerError::MissingField("description"))
        );
        assert!(inventory.is_empty());
        let listing = inventory.add(&form("Cumin"), today()).unwrap();
        assert_eq!(listing.id, ListingId::new(1));
    }

    #[test]
    fn test_update_keeps_image_when_blank() {
        let mut inventory = SellerInventory::demo();
        let id = ListingId::new(1);
        let mut edit = ProductForm::from_listing(inventory.get(id).unwrap());
        edit.stock = "450".to_string();
        edit.image.clear();

        let updated = inventory.update(id, &edit).unwrap();
        assert_eq!(updated.stock, 450);
        assert_eq!(
            updated.image,
            "/placeholder.svg?height=100&width=100&text=Tomatoes"
        );
        assert_eq!(updated.review_count, 23);

        edit.image = "https://cdn.example.com/new.png".to_string();
        let updated = inventory.update(id, &edit).unwrap();
        assert_eq!(updated.image, "https://cdn.example.com/new.png");
    }

    #[test]
    fn test_from_listing_round_trips_fields() {
        let inventory = SellerInventory::demo();
        let form = ProductForm::from_listing(inventory.get(ListingId::new(2)).unwrap());
        assert_eq!(form.price, "1.8");
        assert_eq!(form.unit, "kg");
        assert_eq!(form.category, "Vegetables");
        assert_eq!(form.expiry_days, "14");
        assert_eq!(form.min_order_quantity, "10");
    }

    #[test]
    fn test_unknown_ids() {
        let mut inventory = SellerInventory::demo();
        let missing = ListingId::new(99);
        assert_eq!(
            inventory.update(missing, &form("Cumin")),
            Err(SellerError::UnknownProduct(missing))
        );
        assert_eq!(
            inventory.delete(missing),
            Err(SellerError::UnknownProduct(missing))
        );
        assert_eq!(
            inventory.set_active(missing, false),
            Err(SellerError::UnknownProduct(missing))
        );
    }

    #[test]
    fn test_active_filters_hidden_listings() {
        let mut inventory = SellerInventory::demo();
        inventory.set_active(ListingId::new(2), false).unwrap();
        let names: Vec<_> = inventory.active().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Premium Tomatoes", "Bell Peppers Mix"]);
        assert_eq!(inventory.iter().count(), 3);
    }
}
