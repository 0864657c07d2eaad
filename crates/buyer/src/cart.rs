//! Shopping cart.
//!
//! A [`Cart`] holds at most one line per item, each with a quantity of at
//! least one. Lines keep the order in which items were first added. The cart
//! does not check stock; [`crate::BuyerSession::add_to_cart`] does that
//! before calling in.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use supply_stall_core::{CurrencyCode, Item, ItemId, Price, round_money};

use crate::error::BuyerError;

/// One item in the cart with its quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    /// Snapshot of the catalog item when it was first added.
    pub item: Item,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// `price × quantity` for this line, unrounded.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

/// What a successful checkout reports back to the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    /// Sum of quantities across all lines.
    pub item_count: u64,
    /// Cart total rounded to cents.
    pub total: Decimal,
}

impl CheckoutSummary {
    /// Confirmation text shown to the buyer.
    #[must_use]
    pub fn message(&self, currency: CurrencyCode) -> String {
        format!(
            "Proceeding to checkout with {} items totaling {}",
            self.item_count,
            Price::new(self.total, currency)
        )
    }
}

/// The buyer's cart, keyed by item id in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: IndexMap<ItemId, CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `item`, creating the line if needed.
    pub fn add_item(&mut self, item: &Item) {
        self.add_quantity(item, 1);
    }

    /// Add `quantity` units of `item` at once.
    ///
    /// Same result as calling [`Cart::add_item`] `quantity` times. Adding zero
    /// units does nothing.
    pub fn add_quantity(&mut self, item: &Item, quantity: u32) {
        if quantity == 0 {
            return;
        }

        let line = self.lines.entry(item.id).or_insert_with(|| CartLine {
            item: item.clone(),
            quantity: 0,
        });
        line.quantity = line.quantity.saturating_add(quantity);
        debug!(item_id = %item.id, quantity = line.quantity, "cart line added");
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of zero or below removes the line. Unknown ids are ignored.
    pub fn set_quantity(&mut self, item_id: ItemId, new_quantity: i64) {
        if new_quantity <= 0 {
            self.remove_item(item_id);
            return;
        }

        if let Some(line) = self.lines.get_mut(&item_id) {
            line.quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
            debug!(%item_id, quantity = line.quantity, "cart quantity set");
        }
    }

    /// Remove the line for `item_id`, if any.
    pub fn remove_item(&mut self, item_id: ItemId) {
        if self.lines.shift_remove(&item_id).is_some() {
            debug!(%item_id, "cart line removed");
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        debug!("cart cleared");
    }

    /// Sum of `price × quantity`, rounded to cents.
    #[must_use]
    pub fn total(&self) -> Decimal {
        round_money(self.lines.values().map(CartLine::line_total).sum())
    }

    /// Sum of quantities, used for the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    /// Summarise the cart for checkout.
    ///
    /// The cart is left as it is either way; clearing after a successful
    /// checkout is up to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`BuyerError::EmptyCart`] when there is nothing to check out.
    pub fn checkout(&self) -> Result<CheckoutSummary, BuyerError> {
        if self.is_empty() {
            return Err(BuyerError::EmptyCart);
        }

        Ok(CheckoutSummary {
            item_count: self.item_count(),
            total: self.total(),
        })
    }

    /// Quantity currently in the cart for `item_id` (zero when absent).
    #[must_use]
    pub fn quantity_of(&self, item_id: ItemId) -> u32 {
        self.lines.get(&item_id).map_or(0, |line| line.quantity)
    }

    #[must_use]
    pub fn line(&self, item_id: ItemId) -> Option<&CartLine> {
        self.lines.get(&item_id)
    }

    /// Lines in the order items were first added.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use supply_stall_core::{Category, Rating, Unit};

    fn item(id: i64, price_cents: i64) -> Item {
        Item {
            id: ItemId::new(id),
            name: format!("Item {id}"),
            supplier: "Supplier".to_string(),
            business_name: "Business".to_string(),
            category: Category::Vegetables,
            description: String::new(),
            location: String::new(),
            price: Decimal::new(price_cents, 2),
            unit: Unit::Kg,
            in_stock: true,
            rating: Rating::default(),
            review_count: 0,
            total_orders: 0,
        }
    }

    #[test]
    fn test_repeated_add_increments_single_line() {
        let mut cart = Cart::new();
        let tomatoes = item(1, 250);
        for _ in 0..5 {
            cart.add_item(&tomatoes);
        }
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(tomatoes.id), 5);
    }

    #[test]
    fn test_set_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        let a = item(1, 100);
        let b = item(2, 100);
        cart.add_item(&a);
        cart.add_item(&b);

        cart.set_quantity(a.id, 0);
        cart.set_quantity(b.id, -1);

        assert!(cart.line(a.id).is_none());
        assert!(cart.line(b.id).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_on_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&item(1, 100));
        cart.set_quantity(ItemId::new(99), 4);
        assert_eq!(cart.len(), 1);
        assert!(cart.line(ItemId::new(99)).is_none());
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        let a = item(1, 100);
        cart.add_item(&a);
        cart.set_quantity(a.id, 12);
        assert_eq!(cart.quantity_of(a.id), 12);
    }

    #[test]
    fn test_total_rounds_to_cents() {
        let mut cart = Cart::new();
        let tomatoes = item(1, 250);
        cart.add_item(&tomatoes);
        cart.add_item(&tomatoes);
        cart.add_item(&tomatoes);
        assert_eq!(cart.total(), Decimal::new(750, 2));

        let mut odd = Cart::new();
        odd.add_quantity(
            &Item {
                price: Decimal::new(3335, 3),
                ..item(2, 0)
            },
            1,
        );
        assert_eq!(odd.total(), Decimal::new(334, 2));
    }

    #[test]
    fn test_item_count_sums_quantities() {
        let mut cart = Cart::new();
        let a = item(1, 100);
        let b = item(2, 100);
        cart.add_item(&a);
        cart.add_item(&a);
        cart.add_item(&b);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut cart = Cart::new();
        for id in 1..=3 {
            cart.add_item(&item(id, 100));
        }
        cart.remove_item(ItemId::new(2));
        cart.remove_item(ItemId::new(42));
        let ids: Vec<_> = cart.lines().map(|line| line.item.id.as_i64()).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_checkout_empty_cart_fails_and_leaves_cart() {
        let cart = Cart::new();
        assert_eq!(cart.checkout(), Err(BuyerError::EmptyCart));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_does_not_clear() {
        let mut cart = Cart::new();
        let tomatoes = item(1, 250);
        cart.add_item(&tomatoes);
        cart.add_item(&tomatoes);

        let summary = cart.checkout().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, Decimal::new(500, 2));
        assert_eq!(
            summary.message(CurrencyCode::USD),
            "Proceeding to checkout with 2 items totaling $5.00"
        );
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&item(1, 100));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
    }
}
