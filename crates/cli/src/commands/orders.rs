//! `stall orders`: buyer order history and reordering.

use rust_decimal::Decimal;
use serde::Serialize;

use supply_stall_buyer::{BuyerSession, OrderHistory, ReorderOutcome};
use supply_stall_core::{Catalog, CurrencyCode, OrderNumber, OrderStatus, Price};

use super::CommandError;
use crate::output::Printer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub number: OrderNumber,
    pub supplier: String,
    pub items: Vec<String>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub date: String,
    pub can_review: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersReport {
    pub orders: Vec<OrderRow>,
    pub currency: CurrencyCode,
    /// Present when an order was put back in the cart.
    pub reorder: Option<ReorderOutcome>,
    pub cart_count: u64,
}

impl OrdersReport {
    fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for order in &self.orders {
            let review = if order.can_review { "  [can review]" } else { "" };
            lines.push(format!(
                "{}  {}  {}  {}  {}{review}",
                order.number,
                order.supplier,
                order.status,
                Price::new(order.total, self.currency),
                order.date
            ));
            lines.extend(order.items.iter().map(|item| format!("    {item}")));
        }

        if let Some(outcome) = &self.reorder {
            let added: u32 = outcome.added.iter().map(|(_, quantity)| quantity).sum();
            lines.push(format!("Reordered {added} units; cart now has {}", self.cart_count));
            for skipped in &outcome.skipped {
                lines.push(format!("  Skipped {skipped}: unavailable"));
            }
        }
        lines
    }
}

/// Show the demo buyer's orders, reordering `reorder` first when given.
pub fn run(
    catalog: Catalog,
    reorder: Option<&OrderNumber>,
    printer: Printer,
) -> Result<(), CommandError> {
    let report = orders(catalog, reorder)?;
    printer.emit(&report, OrdersReport::lines)?;
    Ok(())
}

fn orders(catalog: Catalog, reorder: Option<&OrderNumber>) -> Result<OrdersReport, CommandError> {
    let mut session = BuyerSession::with_orders(catalog, OrderHistory::demo());
    let outcome = reorder.map(|number| session.reorder(number)).transpose()?;

    let orders = session
        .orders()
        .iter()
        .map(|order| OrderRow {
            number: order.number.clone(),
            supplier: order.supplier.clone(),
            items: order.lines.iter().map(|line| line.label()).collect(),
            total: order.total(),
            status: order.status,
            date: order.date.to_string(),
            can_review: order.can_review(),
        })
        .collect();

    Ok(OrdersReport {
        orders,
        currency: session.catalog().currency(),
        reorder: outcome,
        cart_count: session.cart().item_count(),
    })
}
