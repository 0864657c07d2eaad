//! Orders received by the seller.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use supply_stall_core::{OrderNumber, OrderStatus, Unit};

use crate::error::{Result, SellerError};

/// An order placed by a street-food vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerOrder {
    pub number: OrderNumber,
    /// Buyer's name.
    pub buyer: String,
    /// Name of the buyer's stall or restaurant.
    pub buyer_business: String,
    pub product: String,
    pub quantity: u32,
    pub unit: Unit,
    /// Order value.
    pub amount: Decimal,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

impl SellerOrder {
    /// Quantity label such as "50 kg".
    #[must_use]
    pub fn quantity_label(&self) -> String {
        format!("{} {}", self.quantity, self.unit)
    }

    /// Whether the "Mark Shipped" action applies.
    #[must_use]
    pub fn can_ship(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// The seller's order book, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerOrders {
    orders: Vec<SellerOrder>,
}

impl SellerOrders {
    #[must_use]
    pub const fn new(orders: Vec<SellerOrder>) -> Self {
        Self { orders }
    }

    /// Recent orders on the demo seller's dashboard.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![
            SellerOrder {
                number: OrderNumber::from_sequence(1),
                buyer: "Street Tacos Co.".to_string(),
                buyer_business: "Maria's Taco Stand".to_string(),
                product: "Premium Tomatoes".to_string(),
                quantity: 50,
                unit: Unit::Kg,
                amount: Decimal::from(125),
                status: OrderStatus::Pending,
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
            },
            SellerOrder {
                number: OrderNumber::from_sequence(2),
                buyer: "Burger Express".to_string(),
                buyer_business: "Mike's Burger Joint".to_string(),
                product: "Fresh Onions".to_string(),
                quantity: 25,
                unit: Unit::Kg,
                amount: Decimal::from(75),
                status: OrderStatus::Completed,
                date: NaiveDate::from_ymd_opt(2024, 1, 14).unwrap_or_default(),
            },
        ])
    }

    #[must_use]
    pub fn get(&self, number: &OrderNumber) -> Option<&SellerOrder> {
        self.orders.iter().find(|order| &order.number == number)
    }

    /// Move a pending order to shipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the order is unknown or not pending.
    #[instrument(skip(self), fields(order = %number))]
    pub fn mark_shipped(&mut self, number: &OrderNumber) -> Result<&SellerOrder> {
        let order = self
            .orders
            .iter_mut()
            .find(|order| &order.number == number)
            .ok_or_else(|| SellerError::UnknownOrder(number.clone()))?;

        if !order.can_ship() {
            warn!(status = %order.status, "order cannot be shipped");
            return Err(SellerError::InvalidTransition {
                order: number.clone(),
                from: order.status,
                to: OrderStatus::Shipped,
            });
        }

        order.status = OrderStatus::Shipped;
        info!("order marked shipped");
        Ok(order)
    }

    /// Orders waiting to be shipped.
    pub fn pending(&self) -> impl Iterator<Item = &SellerOrder> {
        self.orders.iter().filter(|order| order.can_ship())
    }

    /// Sum of all order amounts.
    #[must_use]
    pub fn revenue(&self) -> Decimal {
        self.orders.iter().map(|order| order.amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SellerOrder> {
        self.orders.iter()
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
