//! ActorEntity trait implementation for the Order domain type.
//!
//! An order is built from the request in `from_create_params` (customer name
//! and a non-empty line list, no other actor involved) and completed in
//! `on_create`, where the stock for every line is reserved in one product
//! transaction and the lines are priced from that reservation. Lines are
//! checked in request order inside that transaction: existence, then a
//! positive quantity, then stock, then a representable price. If the
//! reservation fails the order is never stored.
//!
//! Orders are immutable once stored: the `Update` and `Action` types are
//! uninhabited.

use super::error::OrderError;
use crate::clients::ProductClient;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderLineRequest};
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let customer_name = params.customer_name.trim();
        if customer_name.is_empty() {
            return Err(OrderError::InvalidRequest(
                "customer name must not be empty".to_string(),
            ));
        }
        if params.lines.is_empty() {
            return Err(OrderError::InvalidRequest(
                "an order needs at least one item".to_string(),
            ));
        }

        Ok(Self {
            id,
            customer_name: customer_name.to_string(),
            order_date: Utc::now(),
            total_amount: Decimal::ZERO,
            items: params.lines.into_iter().map(OrderItem::unpriced).collect(),
        })
    }

    fn not_found(id: &OrderId) -> OrderError {
        OrderError::NotFound(*id)
    }

    /// Reserves stock for every line and prices the order.
    ///
    /// The product transaction prices each line and rejects totals that do
    /// not fit in a `Decimal` before it commits, so totalling the same lines
    /// here succeeds and a committed reservation ends up as a stored order.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), OrderError> {
        let lines: Vec<OrderLineRequest> = self.items.iter().map(OrderItem::line_request).collect();
        let reserved = products.reserve_lines(&lines).await?;

        for (item, reservation) in self.items.iter_mut().zip(reserved) {
            item.product_name = reservation.product_name;
            item.unit_price = reservation.unit_price;
        }
        self.total_amount = Order::total_of(&self.items)
            .ok_or_else(|| OrderError::InvalidRequest("order total is too large".to_string()))?;
        debug!(order_id = %self.id, total = %self.total_amount, "Order priced");
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &ProductClient) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &ProductClient) -> Result<(), OrderError> {
        match action {}
    }
}
