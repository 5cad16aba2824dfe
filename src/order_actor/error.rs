//! Error types for the Order actor.

use crate::framework::FrameworkError;
use crate::model::{OrderId, ProductId};
use crate::product_actor::ProductError;
use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The request itself is malformed (blank customer name, no lines, zero quantity).
    #[error("Invalid order request: {0}")]
    InvalidRequest(String),

    /// A line names a product that does not exist.
    #[error("Product with ID {0} not found")]
    ProductNotFound(ProductId),

    /// A line asks for more than is left. `available` is what was left when
    /// the line was checked, after earlier lines of the same order.
    #[error(
        "Insufficient stock for product {product_id}. Available: {available}, Requested: {requested}"
    )]
    InsufficientStock {
        product_id: ProductId,
        available: u32,
        requested: u32,
    },

    /// The requested order was not found.
    #[error("Order {0} not found")]
    NotFound(OrderId),

    /// The actors could not be reached. The caller may retry, knowing a
    /// retry is a new order.
    #[error("Storage temporarily unavailable: {0}")]
    TransientStorageFailure(String),
}

impl OrderError {
    /// Whether the caller sent something that can never succeed as is.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            OrderError::InvalidRequest(_)
                | OrderError::ProductNotFound(_)
                | OrderError::InsufficientStock { .. }
        )
    }
}

impl From<ProductError> for OrderError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(id) => OrderError::ProductNotFound(id),
            ProductError::InsufficientStock {
                product_id,
                available,
                requested,
            } => OrderError::InsufficientStock {
                product_id,
                available,
                requested,
            },
            ProductError::InvalidQuantity { product_id, .. } => {
                OrderError::InvalidRequest(format!("quantity for {product_id} must be positive"))
            }
            ProductError::LineTotalOverflow(product_id) => {
                OrderError::InvalidRequest(format!("line total for {product_id} is too large"))
            }
            ProductError::TotalOverflow => {
                OrderError::InvalidRequest("order total is too large".to_string())
            }
            // Stored prices are checked on the way in; a bad one cannot be retried away.
            ProductError::InvalidPrice(_) => OrderError::InvalidRequest(e.to_string()),
            ProductError::ActorCommunicationError(_) => {
                OrderError::TransientStorageFailure(e.to_string())
            }
        }
    }
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        e.into_entity_error::<OrderError>()
            .unwrap_or_else(|other| OrderError::TransientStorageFailure(other.to_string()))
    }
}
