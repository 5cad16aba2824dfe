//! Custom actions for the Product actor.
//!
//! The domain operations that go beyond CRUD on a
//! [`Product`](crate::model::Product): reading and reserving stock. They are
//! handled by [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action),
//! either one at a time or batched into a transaction.

use crate::model::ProductId;
use rust_decimal::Decimal;

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Takes the given number of units out of stock.
    ///
    /// # Errors
    /// Fails if the amount is zero, exceeds the stock left, or prices out
    /// beyond what a `Decimal` can hold.
    ReserveStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from CheckStock action - the current stock level
    CheckStock(u32),
    /// Result from ReserveStock action - what was taken, at which price
    ReserveStock(StockReservation),
}

/// A successful reservation, with the product data an order line needs.
#[derive(Debug, Clone, PartialEq)]
pub struct StockReservation {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub line_total: Decimal,
    /// Stock left after this reservation.
    pub remaining: u32,
}
