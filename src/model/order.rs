//! Represents a customer order and its line items.
//!
//! # Actor Framework
//! [`Order`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See `impl ActorEntity for Order` for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Stock reservation in `on_create`

use crate::model::ProductId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// One requested line: which product, how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLineRequest {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLineRequest {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// A persisted order line. `unit_price` is the price at the time the order was placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl OrderItem {
    /// A line that has not been priced yet. Name and price are filled in
    /// once the stock for it is reserved.
    pub fn unpriced(line: OrderLineRequest) -> Self {
        Self {
            product_id: line.product_id,
            product_name: String::new(),
            quantity: line.quantity,
            unit_price: Decimal::ZERO,
        }
    }

    pub fn line_request(&self) -> OrderLineRequest {
        OrderLineRequest::new(self.product_id, self.quantity)
    }

    /// `unit_price * quantity`, or `None` if it does not fit in a `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the line totals of `items`, or `None` on overflow.
    pub fn total_of(items: &[OrderItem]) -> Option<Decimal> {
        items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.line_total()?)
        })
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub lines: Vec<OrderLineRequest>,
}

impl OrderCreate {
    pub fn new(customer_name: impl Into<String>, lines: Vec<OrderLineRequest>) -> Self {
        Self {
            customer_name: customer_name.into(),
            lines,
        }
    }
}
