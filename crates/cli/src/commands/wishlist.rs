//! `stall wishlist`: save items and optionally move some to the cart.

use serde::Serialize;

use supply_stall_buyer::BuyerSession;
use supply_stall_core::{Catalog, ItemId};

use super::CommandError;
use super::catalog::ItemRow;
use crate::output::Printer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WishlistReport {
    pub items: Vec<ItemRow>,
    /// Ids that were added to the cart.
    pub moved: Vec<ItemId>,
    /// Ids that could not be moved: not wishlisted or out of stock.
    pub not_moved: Vec<ItemId>,
    pub cart_count: u64,
}

impl WishlistReport {
    fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Wishlist ({})", self.items.len())];
        lines.extend(self.items.iter().map(|row| format!("  {}", row.line())));
        if !self.not_moved.is_empty() {
            let ids: Vec<_> = self.not_moved.iter().map(ToString::to_string).collect();
            lines.push(format!("Could not add to cart: {}", ids.join(", ")));
        }
        lines.push(format!("Cart ({})", self.cart_count));
        lines
    }
}

/// Save `items`, then add each of `move_to_cart` to the cart.
pub fn run(
    catalog: Catalog,
    items: &[ItemId],
    move_to_cart: &[ItemId],
    threshold: u32,
    printer: Printer,
) -> Result<(), CommandError> {
    let report = wishlist(catalog, items, move_to_cart, threshold)?;
    printer.emit(&report, WishlistReport::lines)?;
    Ok(())
}

fn wishlist(
    catalog: Catalog,
    items: &[ItemId],
    move_to_cart: &[ItemId],
    threshold: u32,
) -> Result<WishlistReport, CommandError> {
    let mut session = BuyerSession::new(catalog);
    for &item_id in items {
        session.add_to_wishlist(item_id)?;
    }

    let (moved, not_moved): (Vec<ItemId>, Vec<ItemId>) = move_to_cart
        .iter()
        .partition(|&&item_id| session.move_to_cart(item_id));
    for item_id in &not_moved {
        tracing::warn!(%item_id, "Item not moved to cart");
    }

    let catalog = session.catalog();
    Ok(WishlistReport {
        items: session
            .wishlist()
            .items()
            .map(|item| ItemRow::new(item, catalog, threshold))
            .collect(),
        moved,
        not_moved,
        cart_count: session.cart().item_count(),
    })
}
