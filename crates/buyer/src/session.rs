//! Buyer session: everything one buyer's dashboard owns.
//!
//! A [`BuyerSession`] owns the catalog snapshot, cart, wishlist, browse
//! state and order history for a single buyer. It is the layer the display
//! talks to, and the place where out-of-stock items are kept out of the
//! cart.

use serde::Serialize;
use tracing::{info, instrument, warn};

use supply_stall_core::{BusinessId, Catalog, Item, ItemId, OrderNumber};

use crate::cart::{Cart, CheckoutSummary};
use crate::error::{BuyerError, Result};
use crate::orders::{self, OrderHistory, ReorderOutcome};
use crate::review::ReviewDraft;
use crate::search::{BrowseMode, BrowseState, SearchHit};
use crate::wishlist::Wishlist;

/// Dashboard tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyerTab {
    #[default]
    Browse,
    Orders,
    Wishlist,
    Cart,
}

impl BuyerTab {
    pub const ALL: [Self; 4] = [Self::Browse, Self::Orders, Self::Wishlist, Self::Cart];
}

/// State owned by one buyer's dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct BuyerSession {
    #[serde(skip)]
    catalog: Catalog,
    cart: Cart,
    wishlist: Wishlist,
    browse: BrowseState,
    orders: OrderHistory,
    active_tab: BuyerTab,
}

impl BuyerSession {
    /// Start a session with an empty cart, wishlist and order history.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self::with_orders(catalog, OrderHistory::default())
    }

    /// Start a session with existing order history.
    #[must_use]
    pub fn with_orders(catalog: Catalog, orders: OrderHistory) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            browse: BrowseState::new(),
            orders,
            active_tab: BuyerTab::default(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn browse(&self) -> &BrowseState {
        &self.browse
    }

    #[must_use]
    pub const fn orders(&self) -> &OrderHistory {
        &self.orders
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of an in-stock item to the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or out of stock.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, item_id: ItemId) -> Result<()> {
        let item = self
            .catalog
            .item(item_id)
            .ok_or(BuyerError::UnknownItem(item_id))?;
        if !item.in_stock {
            warn!(%item_id, "refused to add out-of-stock item");
            return Err(BuyerError::OutOfStock(item.name.clone()));
        }
        self.cart.add_item(item);
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: i64) {
        self.cart.set_quantity(item_id, quantity);
    }

    #[instrument(skip(self))]
    pub fn remove_from_cart(&mut self, item_id: ItemId) {
        self.cart.remove_item(item_id);
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Summarise the cart for checkout. The cart is not cleared.
    ///
    /// # Errors
    ///
    /// Returns [`BuyerError::EmptyCart`] when the cart is empty.
    #[instrument(skip(self))]
    pub fn checkout(&self) -> Result<CheckoutSummary> {
        match self.cart.checkout() {
            Ok(summary) => {
                info!(
                    item_count = summary.item_count,
                    total = %summary.total,
                    "checkout summary ready"
                );
                Ok(summary)
            }
            Err(err) => {
                warn!(error = %err, "checkout refused");
                Err(err)
            }
        }
    }

    /// Go back to browsing from the cart.
    pub fn continue_shopping(&mut self) {
        self.active_tab = BuyerTab::Browse;
    }

    // =========================================================================
    // Wishlist
    // =========================================================================

    /// Save an item to the wishlist. Saving twice keeps one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    #[instrument(skip(self))]
    pub fn add_to_wishlist(&mut self, item_id: ItemId) -> Result<()> {
        let item = self
            .catalog
            .item(item_id)
            .ok_or(BuyerError::UnknownItem(item_id))?;
        self.wishlist.add(item);
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&mut self, item_id: ItemId) {
        self.wishlist.remove(item_id);
    }

    pub fn clear_wishlist(&mut self) {
        self.wishlist.clear();
    }

    /// Flip the heart on an item. Returns whether it is now wishlisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    pub fn toggle_wishlist(&mut self, item_id: ItemId) -> Result<bool> {
        if self.wishlist.contains(item_id) {
            self.wishlist.remove(item_id);
            Ok(false)
        } else {
            self.add_to_wishlist(item_id)?;
            Ok(true)
        }
    }

    /// Add a wishlisted item to the cart; the wishlist keeps it.
    #[instrument(skip(self))]
    pub fn move_to_cart(&mut self, item_id: ItemId) -> bool {
        self.wishlist.move_to_cart(item_id, &mut self.cart)
    }

    // =========================================================================
    // Search & browse
    // =========================================================================

    /// Type into the search box. Results are recomputed immediately.
    #[instrument(skip(self))]
    pub fn set_query(&mut self, query: &str) {
        self.browse.set_query(query, &self.catalog);
    }

    pub fn clear_query(&mut self) {
        self.browse.clear_query();
    }

    /// Drill into one business's products.
    ///
    /// # Errors
    ///
    /// Returns an error if the business is unknown.
    #[instrument(skip(self))]
    pub fn select_business(&mut self, business_id: BusinessId) -> Result<()> {
        let business = self
            .catalog
            .business(business_id)
            .ok_or(BuyerError::UnknownBusiness(business_id))?;
        self.browse.select_business(business, &self.catalog);
        Ok(())
    }

    /// Leave the drill-down, clearing query and results.
    pub fn back(&mut self) {
        self.browse.back();
    }

    #[must_use]
    pub fn browse_mode(&self) -> BrowseMode {
        self.browse.mode()
    }

    /// Current search results, resolved against the catalog.
    #[must_use]
    pub fn search_results(&self) -> Vec<SearchHit<'_>> {
        self.browse
            .results()
            .iter()
            .filter_map(|result| result.resolve(&self.catalog))
            .collect()
    }

    /// Items the product grid shows right now.
    #[must_use]
    pub fn visible_items(&self) -> Vec<&Item> {
        self.browse.visible_items(&self.catalog).collect()
    }

    // =========================================================================
    // Orders & reviews
    // =========================================================================

    /// Put a past order back into the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the order number is unknown.
    #[instrument(skip(self))]
    pub fn reorder(&mut self, number: &OrderNumber) -> Result<ReorderOutcome> {
        let order = self
            .orders
            .get(number)
            .ok_or_else(|| BuyerError::UnknownOrder(number.clone()))?;
        let outcome = orders::reorder(order, &self.catalog, &mut self.cart);
        info!(
            added = outcome.added.len(),
            skipped = outcome.skipped.len(),
            "reordered items"
        );
        Ok(outcome)
    }

    /// Start reviewing a delivered order.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or not yet delivered.
    pub fn start_review(&self, number: &OrderNumber) -> Result<ReviewDraft> {
        let order = self
            .orders
            .get(number)
            .ok_or_else(|| BuyerError::UnknownOrder(number.clone()))?;
        Ok(ReviewDraft::for_order(order)?)
    }

    // =========================================================================
    // Tabs
    // =========================================================================

    #[must_use]
    pub const fn active_tab(&self) -> BuyerTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: BuyerTab) {
        self.active_tab = tab;
    }

    /// Tab label including live counts, e.g. "Cart (3)".
    #[must_use]
    pub fn tab_label(&self, tab: BuyerTab) -> String {
        match tab {
            BuyerTab::Browse => "Browse Products".to_string(),
            BuyerTab::Orders => "My Orders".to_string(),
            BuyerTab::Wishlist => format!("Wishlist ({})", self.wishlist.len()),
            BuyerTab::Cart => format!("Cart ({})", self.cart.item_count()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn session() -> BuyerSession {
        BuyerSession::with_orders(Catalog::demo(), OrderHistory::demo())
    }

    #[test]
    fn test_add_to_cart_guards_stock() {
        let mut session = session();
        assert_eq!(
            session.add_to_cart(ItemId::new(6)),
            Err(BuyerError::OutOfStock("Extra Virgin Olive Oil".to_string()))
        );
        assert_eq!(
            session.add_to_cart(ItemId::new(99)),
            Err(BuyerError::UnknownItem(ItemId::new(99)))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_checkout_flow() {
        let mut session = session();
        session.add_to_cart(ItemId::new(1)).unwrap();
        session.add_to_cart(ItemId::new(1)).unwrap();

        let summary = session.checkout().unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total, Decimal::new(500, 2));

        session.clear_cart();
        assert_eq!(session.checkout(), Err(BuyerError::EmptyCart));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_toggle_wishlist() {
        let mut session = session();
        assert!(session.toggle_wishlist(ItemId::new(3)).unwrap());
        assert!(session.wishlist().contains(ItemId::new(3)));
        assert!(!session.toggle_wishlist(ItemId::new(3)).unwrap());
        assert!(session.wishlist().is_empty());
    }

    #[test]
    fn test_tab_labels_track_counts() {
        let mut session = session();
        session.add_to_cart(ItemId::new(1)).unwrap();
        session.add_to_cart(ItemId::new(2)).unwrap();
        session.add_to_cart(ItemId::new(2)).unwrap();
        session.add_to_wishlist(ItemId::new(5)).unwrap();

        assert_eq!(session.tab_label(BuyerTab::Cart), "Cart (3)");
        assert_eq!(session.tab_label(BuyerTab::Wishlist), "Wishlist (1)");

        session.set_tab(BuyerTab::Cart);
        session.continue_shopping();
        assert_eq!(session.active_tab(), BuyerTab::Browse);
    }

    #[test]
    fn test_select_unknown_business() {
        let mut session = session();
        assert_eq!(
            session.select_business(BusinessId::new(42)),
            Err(BuyerError::UnknownBusiness(BusinessId::new(42)))
        );
        assert_eq!(session.browse_mode(), BrowseMode::Idle);
    }

    #[test]
    fn test_start_review_requires_known_delivered_order() {
        let session = session();
        assert!(session.start_review(&OrderNumber::new("ORD-001")).is_ok());
        assert!(matches!(
            session.start_review(&OrderNumber::new("ORD-002")),
            Err(BuyerError::Review(_))
        ));
        assert!(matches!(
            session.start_review(&OrderNumber::new("ORD-999")),
            Err(BuyerError::UnknownOrder(_))
        ));
    }
}
