//! `stall catalog` and the item/business rows shared by other commands.

use serde::Serialize;

use supply_stall_core::{Business, BusinessId, Catalog, Category, Item, ItemId, Rating};

use super::CommandError;
use crate::output::Printer;

/// One item as listed on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub business: String,
    pub category: Category,
    /// Price per unit, e.g. "$2.50/kg".
    pub price: String,
    pub in_stock: bool,
    pub verified: bool,
    pub rating: Rating,
    pub review_count: u32,
}

impl ItemRow {
    pub fn new(item: &Item, catalog: &Catalog, threshold: u32) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            business: item.business_name.clone(),
            category: item.category,
            price: catalog.price_of(item).per_unit(item.unit),
            in_stock: item.in_stock,
            verified: item.meets_order_threshold(threshold),
            rating: item.rating,
            review_count: item.review_count,
        }
    }

    pub fn line(&self) -> String {
        let mut line = format!(
            "#{:<3} {:<24} {:>10}  {} ({} reviews)  {}",
            self.id, self.name, self.price, self.rating, self.review_count, self.business
        );
        if self.verified {
            line.push_str(" [verified]");
        }
        if !self.in_stock {
            line.push_str(" (out of stock)");
        }
        line
    }
}

/// One business as listed on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRow {
    pub id: BusinessId,
    pub name: String,
    pub owner: String,
    pub location: String,
    pub verified: bool,
    pub rating: Rating,
    pub total_orders: u32,
}

impl BusinessRow {
    pub fn new(business: &Business, threshold: u32) -> Self {
        Self {
            id: business.id,
            name: business.name.clone(),
            owner: business.owner.clone(),
            location: business.location.clone(),
            verified: business.meets_order_threshold(threshold),
            rating: business.rating,
            total_orders: business.total_orders,
        }
    }

    pub fn line(&self) -> String {
        let badge = if self.verified { " [verified]" } else { "" };
        format!(
            "{}{badge}  by {}, {}  {} stars, {} orders",
            self.name, self.owner, self.location, self.rating, self.total_orders
        )
    }
}

/// Rows for every catalog item, or only in-stock ones.
pub fn item_rows(catalog: &Catalog, in_stock_only: bool, threshold: u32) -> Vec<ItemRow> {
    catalog
        .items()
        .iter()
        .filter(|item| !in_stock_only || item.in_stock)
        .map(|item| ItemRow::new(item, catalog, threshold))
        .collect()
}

/// List catalog items.
pub fn list(
    catalog: &Catalog,
    in_stock_only: bool,
    threshold: u32,
    printer: Printer,
) -> Result<(), CommandError> {
    let rows = item_rows(catalog, in_stock_only, threshold);
    tracing::debug!(items = rows.len(), in_stock_only, "Listing catalog");
    printer.emit(&rows, |rows| {
        if rows.is_empty() {
            return vec!["No items in the catalog".to_string()];
        }
        rows.iter().map(ItemRow::line).collect()
    })?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock_filter() {
        let catalog = Catalog::demo();
        assert_eq!(item_rows(&catalog, false, 500).len(), 6);
        let in_stock = item_rows(&catalog, true, 500);
        assert_eq!(in_stock.len(), 5);
        assert!(in_stock.iter().all(|row| row.in_stock));
    }

    #[test]
    fn test_item_row_line() {
        let catalog = Catalog::demo();
        let rows = item_rows(&catalog, false, 500);
        let tomatoes = &rows[0];
        assert_eq!(tomatoes.price, "$2.50/kg");
        assert!(tomatoes.line().contains("[verified]"));
        assert!(rows[5].line().ends_with("(out of stock)"));
    }

    #[test]
    fn test_threshold_controls_badge() {
        let catalog = Catalog::demo();
        let strict = item_rows(&catalog, false, 10_000);
        assert!(strict.iter().all(|row| !row.verified));
        let business = catalog.business_named("Valley Produce Co.").unwrap();
        assert!(!BusinessRow::new(business, 500).verified);
        assert!(BusinessRow::new(business, 400).verified);
    }
}
