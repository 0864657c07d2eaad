//! Saved-for-later items, independent of the cart.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use supply_stall_core::{Item, ItemId};

use crate::cart::Cart;

/// The buyer's wishlist, keyed by item id in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Wishlist {
    items: IndexMap<ItemId, Item>,
}

impl Wishlist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save `item`. Saving an item that is already present does nothing.
    pub fn add(&mut self, item: &Item) {
        if self.items.contains_key(&item.id) {
            return;
        }
        self.items.insert(item.id, item.clone());
        debug!(item_id = %item.id, "wishlist item added");
    }

    /// Drop `item_id` from the wishlist, if present.
    pub fn remove(&mut self, item_id: ItemId) {
        if self.items.shift_remove(&item_id).is_some() {
            debug!(%item_id, "wishlist item removed");
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        debug!("wishlist cleared");
    }

    /// Membership test, drives the filled/outline heart.
    #[must_use]
    pub fn contains(&self, item_id: ItemId) -> bool {
        self.items.contains_key(&item_id)
    }

    /// Add a wishlisted item to `cart` if it is in stock.
    ///
    /// The wishlist entry stays where it is. Returns `true` when the cart was
    /// changed; unknown ids and out-of-stock items return `false`.
    pub fn move_to_cart(&self, item_id: ItemId, cart: &mut Cart) -> bool {
        match self.items.get(&item_id) {
            Some(item) if item.in_stock => {
                cart.add_item(item);
                true
            }
            Some(_) => {
                debug!(%item_id, "wishlist item out of stock, not added to cart");
                false
            }
            None => false,
        }
    }

    /// Saved items in the order they were added.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
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
