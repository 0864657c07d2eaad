//! Add/edit product form.
//!
//! The form keeps every field as the text the seller typed. [`ProductForm::validate`]
//! turns it into a [`ValidProduct`], applying the defaults for optional
//! fields, and [`ProductForm::from_listing`] fills the form back in for
//! editing.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use supply_stall_core::{Category, Unit, round_money};

use crate::error::{Result, SellerError};
use crate::inventory::Listing;

/// Origin shown when the seller leaves it blank.
pub const DEFAULT_ORIGIN: &str = "Not specified";

/// Minimum order quantity used when the field is blank.
pub const DEFAULT_MIN_ORDER_QUANTITY: u32 = 1;

/// Placeholder image URL for a product without a photo.
#[must_use]
pub fn placeholder_image(name: &str) -> String {
    format!(
        "/placeholder.svg?height=100&width=100&text={}",
        urlencoding::encode(name)
    )
}

/// Raw product form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub unit: String,
    pub stock: String,
    pub description: String,
    pub origin: String,
    pub expiry_days: String,
    pub min_order_quantity: String,
    pub image: String,
}

/// Product fields after validation, ready to become a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub unit: Unit,
    pub stock: u32,
    pub description: String,
    pub origin: String,
    pub expiry_days: Option<u32>,
    pub min_order_quantity: u32,
    /// `None` when the form image was blank.
    pub image: Option<String>,
}

impl ProductForm {
    /// Fields that must not be blank, in form order.
    pub const REQUIRED_FIELDS: [&'static str; 6] =
        ["name", "category", "price", "unit", "stock", "description"];

    fn required(&self, field: &'static str) -> &str {
        match field {
            "name" => &self.name,
            "category" => &self.category,
            "price" => &self.price,
            "unit" => &self.unit,
            "stock" => &self.stock,
            _ => &self.description,
        }
    }

    /// Required fields that are still blank.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .into_iter()
            .filter(|field| self.required(field).trim().is_empty())
            .collect()
    }

    /// Check required fields and parse numbers.
    ///
    /// # Errors
    ///
    /// Returns the first blank required field, or the first field whose
    /// value does not parse.
    pub fn validate(&self) -> Result<ValidProduct> {
        if let Some(field) = self.missing_fields().into_iter().next() {
            return Err(SellerError::MissingField(field));
        }

        let price = parse_number::<Decimal>("price", &self.price)?;
        if price.is_sign_negative() {
            return Err(invalid("price", &self.price));
        }

        let min_order_quantity = match self.min_order_quantity.trim() {
            "" => DEFAULT_MIN_ORDER_QUANTITY,
            raw => match parse_number::<u32>("min_order_quantity", raw)? {
                0 => return Err(invalid("min_order_quantity", raw)),
                quantity => quantity,
            },
        };

        let expiry_days = match self.expiry_days.trim() {
            "" => None,
            raw => Some(parse_number::<u32>("expiry_days", raw)?),
        };

        let origin = match self.origin.trim() {
            "" => DEFAULT_ORIGIN.to_string(),
            origin => origin.to_string(),
        };

        let image = match self.image.trim() {
            "" => None,
            image => Some(image.to_string()),
        };

        Ok(ValidProduct {
            name: self.name.trim().to_string(),
            category: self.category.parse()?,
            price: round_money(price),
            unit: self.unit.parse()?,
            stock: parse_number("stock", &self.stock)?,
            description: self.description.trim().to_string(),
            origin,
            expiry_days,
            min_order_quantity,
            image,
        })
    }

    /// Fill the form from an existing listing for editing.
    #[must_use]
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            category: listing.category.to_string(),
            price: listing.price.normalize().to_string(),
            unit: listing.unit.to_string(),
            stock: listing.stock.to_string(),
            description: listing.description.clone(),
            origin: listing.origin.clone(),
            expiry_days: listing
                .expiry_days
                .map(|days| days.to_string())
                .unwrap_or_default(),
            min_order_quantity: listing.min_order_quantity.to_string(),
            image: listing.image.clone(),
        }
    }
}

impl ValidProduct {
    /// Image to store: the uploaded one or a placeholder from the name.
    #[must_use]
    pub fn image_or_placeholder(&self) -> String {
        self.image
            .clone()
            .unwrap_or_else(|| placeholder_image(&self.name))
    }
}

fn invalid(field: &'static str, value: &str) -> SellerError {
    SellerError::InvalidNumber {
        field,
        value: value.to_string(),
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| invalid(field, value))
}
