//! `stall checkout`: fill a cart and summarise it.

use rust_decimal::Decimal;
use serde::Serialize;

use supply_stall_buyer::BuyerSession;
use supply_stall_core::{Catalog, CurrencyCode, ItemId, Price};

use super::CommandError;
use crate::output::Printer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineRow {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub line_total: Decimal,
}

/// Cart contents and the checkout confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckoutReport {
    pub lines: Vec<CartLineRow>,
    pub item_count: u64,
    pub total: Decimal,
    pub currency: CurrencyCode,
    pub message: String,
}

impl CheckoutReport {
    fn lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| {
                format!(
                    "{:>3} x {:<24} {:>10}",
                    line.quantity,
                    line.name,
                    Price::new(line.line_total, self.currency)
                )
            })
            .chain(std::iter::once(self.message.clone()))
            .collect()
    }
}

/// Add each id to the cart once per occurrence, then check out.
pub fn run(catalog: Catalog, items: &[ItemId], printer: Printer) -> Result<(), CommandError> {
    let report = checkout(catalog, items)?;
    printer.emit(&report, CheckoutReport::lines)?;
    Ok(())
}

fn checkout(catalog: Catalog, items: &[ItemId]) -> Result<CheckoutReport, CommandError> {
    let mut session = BuyerSession::new(catalog);
    for &item_id in items {
        session.add_to_cart(item_id)?;
    }

    let summary = session.checkout()?;
    let lines = session
        .cart()
        .lines()
        .map(|line| CartLineRow {
            id: line.item.id,
            name: line.item.name.clone(),
            quantity: line.quantity,
            line_total: line.line_total(),
        })
        .collect();

    let currency = session.catalog().currency();
    Ok(CheckoutReport {
        lines,
        item_count: summary.item_count,
        total: summary.total,
        currency,
        message: summary.message(currency),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use supply_stall_buyer::BuyerError;

    #[test]
    fn test_repeated_ids_increase_quantity() {
        let ids = [ItemId::new(1), ItemId::new(3), ItemId::new(1)];
        let report = checkout(Catalog::demo(), &ids).unwrap();
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.lines.first().unwrap().quantity, 2);
        assert_eq!(report.item_count, 3);
        assert_eq!(report.total, Decimal::new(1700, 2));
        assert_eq!(
            report.message,
            "Proceeding to checkout with 3 items totaling $17.00"
        );
    }

    #[test]
    fn test_empty_cart() {
        assert!(matches!(
            checkout(Catalog::demo(), &[]),
            Err(CommandError::Buyer(BuyerError::EmptyCart))
        ));
    }

    #[test]
    fn test_out_of_stock_item_is_refused() {
        assert!(matches!(
            checkout(Catalog::demo(), &[ItemId::new(6)]),
            Err(CommandError::Buyer(BuyerError::OutOfStock(_)))
        ));
    }
}
