//! `stall seller`: listings, orders and stats for the demo seller.

use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use supply_stall_core::{CurrencyCode, ListingId, OrderNumber, OrderStatus};
use supply_stall_seller::{Listing, ProductForm, SellerDashboard, SellerOrder, SellerReview};

use super::CommandError;
use crate::output::Printer;

/// Product form fields. Validation happens in the seller library, so every
/// field is optional here.
#[derive(Args, Debug, Clone, Default)]
pub struct ProductArgs {
    /// Product name
    #[arg(long, default_value_t)]
    name: String,

    /// Category (Vegetables, Fruits, Dairy, Meat, Grains, Spices, Oils, Beverages, Frozen, Other)
    #[arg(long, default_value_t)]
    category: String,

    /// Price per unit
    #[arg(long, default_value_t)]
    price: String,

    /// Unit (kg, liter, piece, dozen, pack, box, bag)
    #[arg(long, default_value_t)]
    unit: String,

    /// Units in stock
    #[arg(long, default_value_t)]
    stock: String,

    #[arg(long, default_value_t)]
    description: String,

    /// Where the product comes from
    #[arg(long, default_value_t)]
    origin: String,

    /// Shelf life in days
    #[arg(long, default_value_t)]
    expiry_days: String,

    /// Minimum order quantity (default: 1)
    #[arg(long, default_value_t)]
    min_order: String,

    /// Image URL (default: placeholder)
    #[arg(long, default_value_t)]
    image: String,
}

impl From<ProductArgs> for ProductForm {
    fn from(args: ProductArgs) -> Self {
        Self {
            name: args.name,
            category: args.category,
            price: args.price,
            unit: args.unit,
            stock: args.stock,
            description: args.description,
            origin: args.origin,
            expiry_days: args.expiry_days,
            min_order_quantity: args.min_order,
            image: args.image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub id: ListingId,
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub origin: String,
    pub rating: String,
    pub active: bool,
}

impl ListingRow {
    fn new(listing: &Listing, currency: CurrencyCode) -> Self {
        Self {
            id: listing.id,
            name: listing.name.clone(),
            price: listing.price_label(currency),
            stock: listing.stock,
            origin: listing.origin.clone(),
            rating: listing.rating_label(),
            active: listing.is_active,
        }
    }

    fn line(&self) -> String {
        let hidden = if self.active { "" } else { " (hidden)" };
        format!(
            "#{:<3} {:<20} {:>10}  {} in stock  {}  {}{hidden}",
            self.id, self.name, self.price, self.stock, self.origin, self.rating
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub number: OrderNumber,
    pub buyer: String,
    pub product: String,
    pub quantity: String,
    pub amount: Decimal,
    pub status: OrderStatus,
}

impl OrderRow {
    fn new(order: &SellerOrder) -> Self {
        Self {
            number: order.number.clone(),
            buyer: format!("{} ({})", order.buyer, order.buyer_business),
            product: order.product.clone(),
            quantity: order.quantity_label(),
            amount: order.amount,
            status: order.status,
        }
    }

    fn line(&self) -> String {
        format!(
            "{}  {}  {} x {}  ${}  {}",
            self.number, self.buyer, self.quantity, self.product, self.amount, self.status
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub product: String,
    pub buyer: String,
    pub stars: String,
    pub text: String,
    pub photo: Option<String>,
    pub date: String,
}

impl ReviewRow {
    fn new(review: &SellerReview) -> Self {
        Self {
            product: review.product.clone(),
            buyer: format!("{} (contact: {})", review.buyer_business, review.buyer),
            stars: review.rating.label(),
            text: review.text.clone(),
            photo: review.photo.clone(),
            date: review.date_label(),
        }
    }

    fn lines(&self) -> Vec<String> {
        let photo = if self.photo.is_some() { "  [photo]" } else { "" };
        vec![
            format!("{} by {}  {}", self.product, self.buyer, self.stars),
            format!("  \"{}\"", self.text),
            format!("  {}{photo}", self.date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Confirmation {
    message: String,
}

impl Confirmation {
    fn lines(&self) -> Vec<String> {
        vec![self.message.clone()]
    }
}

fn listing_rows(dashboard: &SellerDashboard) -> Vec<ListingRow> {
    dashboard
        .inventory()
        .iter()
        .map(|listing| ListingRow::new(listing, CurrencyCode::USD))
        .collect()
}

/// List every product with its stock and rating.
pub fn products(dashboard: &SellerDashboard, printer: Printer) -> Result<(), CommandError> {
    printer.emit(&listing_rows(dashboard), |rows| {
        rows.iter().map(ListingRow::line).collect()
    })?;
    Ok(())
}

/// Add a product listed today.
pub fn add(
    dashboard: &mut SellerDashboard,
    form: ProductForm,
    printer: Printer,
) -> Result<(), CommandError> {
    let listing = dashboard.add_product(&form, Utc::now().date_naive())?;
    let row = ListingRow::new(listing, CurrencyCode::USD);
    printer.emit(&row, |row| {
        vec![
            format!("Product \"{}\" added successfully!", row.name),
            row.line(),
        ]
    })?;
    Ok(())
}

/// Replace a listing's details.
pub fn update(
    dashboard: &mut SellerDashboard,
    id: ListingId,
    form: ProductForm,
    printer: Printer,
) -> Result<(), CommandError> {
    let listing = dashboard.update_product(id, &form)?;
    let row = ListingRow::new(listing, CurrencyCode::USD);
    printer.emit(&row, |row| {
        vec!["Product updated successfully!".to_string(), row.line()]
    })?;
    Ok(())
}

/// Delete a listing.
pub fn delete(
    dashboard: &mut SellerDashboard,
    id: ListingId,
    printer: Printer,
) -> Result<(), CommandError> {
    let listing = dashboard.delete_product(id)?;
    let confirmation = Confirmation {
        message: format!("Product \"{}\" deleted successfully!", listing.name),
    };
    printer.emit(&confirmation, Confirmation::lines)?;
    Ok(())
}

/// Headline stats for the overview tab.
pub fn stats(dashboard: &SellerDashboard, printer: Printer) -> Result<(), CommandError> {
    let stats = dashboard.stats();
    let business = dashboard.business();
    printer.emit(&stats, |stats| {
        let badge = if business.is_verified() { " [verified]" } else { "" };
        vec![
            format!("{}{badge}", business.name),
            format!("Active products: {}", stats.active_products),
            format!("Total orders:    {}", stats.total_orders),
            format!("Revenue:         ${}", stats.revenue),
            format!(
                "Average rating:  {}",
                stats
                    .average_rating
                    .map_or_else(|| "No reviews".to_string(), |rating| rating.to_string())
            ),
        ]
    })?;
    Ok(())
}

/// List incoming orders.
pub fn orders(dashboard: &SellerDashboard, printer: Printer) -> Result<(), CommandError> {
    let rows: Vec<OrderRow> = dashboard.orders().iter().map(OrderRow::new).collect();
    printer.emit(&rows, |rows| rows.iter().map(OrderRow::line).collect())?;
    Ok(())
}

/// List customer reviews.
pub fn reviews(dashboard: &SellerDashboard, printer: Printer) -> Result<(), CommandError> {
    let rows: Vec<ReviewRow> = dashboard.reviews().iter().map(ReviewRow::new).collect();
    printer.emit(&rows, |rows| rows.iter().flat_map(ReviewRow::lines).collect())?;
    Ok(())
}

/// Mark a pending order as shipped.
pub fn ship(
    dashboard: &mut SellerDashboard,
    number: &OrderNumber,
    printer: Printer,
) -> Result<(), CommandError> {
    let order = dashboard.mark_shipped(number)?;
    let row = OrderRow::new(order);
    printer.emit(&row, |row| vec![row.line()])?;
    Ok(())
}
