//! Buyer order history and reordering.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use supply_stall_core::{Catalog, ItemId, OrderNumber, OrderStatus, Unit};

use crate::cart::Cart;

/// One line of a past order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub unit: Unit,
    /// Amount paid for this line.
    pub amount: Decimal,
}

impl OrderLine {
    /// Short label, e.g. "Premium Tomatoes (10kg)".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({}{})", self.name, self.quantity, self.unit)
    }
}

/// An order the buyer placed with one supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerOrder {
    pub number: OrderNumber,
    /// Business the order was placed with.
    pub supplier: String,
    pub lines: Vec<OrderLine>,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

impl BuyerOrder {
    /// Sum of line amounts.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|line| line.amount).sum()
    }

    /// Reviews open once the order has been delivered.
    #[must_use]
    pub const fn can_review(&self) -> bool {
        self.status.is_reviewable()
    }
}

/// Result of putting a past order back into the cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReorderOutcome {
    /// Items added, with the quantity added for each.
    pub added: Vec<(ItemId, u32)>,
    /// Lines that could not be added: no longer listed or out of stock.
    pub skipped: Vec<String>,
}

impl ReorderOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Add every line of `order` back into `cart` at its original quantity.
///
/// Lines whose item is gone from `catalog` or out of stock are skipped and
/// reported by label.
pub fn reorder(order: &BuyerOrder, catalog: &Catalog, cart: &mut Cart) -> ReorderOutcome {
    let mut outcome = ReorderOutcome::default();

    for line in &order.lines {
        match catalog.item(line.item_id) {
            Some(item) if item.in_stock => {
                cart.add_quantity(item, line.quantity);
                outcome.added.push((item.id, line.quantity));
            }
            _ => {
                debug!(order = %order.number, item_id = %line.item_id, "reorder line skipped");
                outcome.skipped.push(line.label());
            }
        }
    }

    outcome
}

/// The buyer's past orders, newest last.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderHistory {
    orders: Vec<BuyerOrder>,
}

impl OrderHistory {
    #[must_use]
    pub const fn new(orders: Vec<BuyerOrder>) -> Self {
        Self { orders }
    }

    /// The two orders shown on a fresh buyer dashboard.
    #[must_use]
    pub fn demo() -> Self {
        let line = |id: i64, name: &str, quantity: u32, cents: i64| OrderLine {
            item_id: ItemId::new(id),
            name: name.to_string(),
            quantity,
            unit: Unit::Kg,
            amount: Decimal::new(cents, 2),
        };

        Self::new(vec![
            BuyerOrder {
                number: OrderNumber::from_sequence(1),
                supplier: "Fresh Farm Supplies Co.".to_string(),
                lines: vec![
                    line(1, "Premium Tomatoes", 10, 2500),
                    line(7, "Fresh Lettuce", 5, 2050),
                ],
                status: OrderStatus::Delivered,
                date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
            },
            BuyerOrder {
                number: OrderNumber::from_sequence(2),
                supplier: "Dairy Direct Ltd.".to_string(),
                lines: vec![line(3, "Mozzarella Cheese", 2, 2400)],
                status: OrderStatus::Shipped,
                date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap_or_default(),
            },
        ])
    }

    #[must_use]
    pub fn get(&self, number: &OrderNumber) -> Option<&BuyerOrder> {
        self.orders.iter().find(|order| &order.number == number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuyerOrder> {
        self.orders.iter()
    }

    /// Orders the buyer can review right now.
    pub fn reviewable(&self) -> impl Iterator<Item = &BuyerOrder> {
        self.orders.iter().filter(|order| order.can_review())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_totals_and_labels() {
        let history = OrderHistory::demo();
        let first = history.get(&OrderNumber::new("ORD-001")).unwrap();
        assert_eq!(first.total(), Decimal::new(4550, 2));
        assert_eq!(first.lines[0].label(), "Premium Tomatoes (10kg)");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_only_delivered_orders_are_reviewable() {
        let history = OrderHistory::demo();
        let reviewable: Vec<_> = history
            .reviewable()
            .map(|order| order.number.as_str())
            .collect();
        assert_eq!(reviewable, ["ORD-001"]);
    }

    #[test]
    fn test_reorder_adds_quantities_and_skips_unknown() {
        let catalog = Catalog::demo();
        let history = OrderHistory::demo();
        let mut cart = Cart::new();

        let order = history.get(&OrderNumber::new("ORD-001")).unwrap();
        let outcome = reorder(order, &catalog, &mut cart);

        assert_eq!(outcome.added, [(ItemId::new(1), 10)]);
        assert_eq!(outcome.skipped, ["Fresh Lettuce (5kg)"]);
        assert!(!outcome.is_complete());
        assert_eq!(cart.quantity_of(ItemId::new(1)), 10);
    }

    #[test]
    fn test_reorder_merges_with_existing_line() {
        let catalog = Catalog::demo();
        let history = OrderHistory::demo();
        let mut cart = Cart::new();
        cart.add_item(catalog.item(ItemId::new(3)).unwrap());

        let order = history.get(&OrderNumber::new("ORD-002")).unwrap();
        let outcome = reorder(order, &catalog, &mut cart);

        assert!(outcome.is_complete());
        assert_eq!(cart.quantity_of(ItemId::new(3)), 3);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_reorder_skips_out_of_stock() {
        let catalog = Catalog::demo();
        let mut cart = Cart::new();
        let order = BuyerOrder {
            number: OrderNumber::new("ORD-010"),
            supplier: "Mediterranean Oils Co.".to_string(),
            lines: vec![OrderLine {
                item_id: ItemId::new(6),
                name: "Extra Virgin Olive Oil".to_string(),
                quantity: 2,
                unit: Unit::Liter,
                amount: Decimal::from(30),
            }],
            status: OrderStatus::Delivered,
            date: NaiveDate::default(),
        };

        let outcome = reorder(&order, &catalog, &mut cart);
        assert!(outcome.added.is_empty());
        assert_eq!(outcome.skipped, ["Extra Virgin Olive Oil (2liter)"]);
        assert!(cart.is_empty());
    }
}
