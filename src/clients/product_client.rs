//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes the catalog operations.
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderLineRequest, Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, StockReservation};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ProductError::from(e)
    }
}

/// Like `map_error`, but a plain framework "not found" becomes `NotFound(id)`.
fn map_targeted(id: ProductId) -> impl FnOnce(FrameworkError) -> ProductError {
    move |e| match e {
        FrameworkError::NotFound(_) => ProductError::NotFound(id),
        other => ProductError::from(other),
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

impl ProductClient {
    /// Adds a product to the catalog. Used when seeding.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(ProductError::from)
    }

    /// Every product, ordered by id.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(map_targeted(id))?
        {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve stock for every line, in order, as one transaction.
    ///
    /// Either every line is reserved and the reservations come back in line
    /// order, or the first failing line's error is returned and no stock
    /// has moved.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn reserve_lines(
        &self,
        lines: &[OrderLineRequest],
    ) -> Result<Vec<StockReservation>, ProductError> {
        debug!(?lines, "Reserving order lines");
        let actions = lines
            .iter()
            .map(|line| (line.product_id, ProductAction::ReserveStock(line.quantity)))
            .collect();

        self.inner
            .transact(actions)
            .await
            .map_err(ProductError::from)?
            .into_iter()
            .map(|result| match result {
                ProductActionResult::ReserveStock(reservation) => Ok(reservation),
                other => Err(unexpected(other)),
            })
            .collect()
    }

    /// Change a product's unit price.
    #[instrument(skip(self))]
    pub async fn reprice(&self, id: ProductId, price: Decimal) -> Result<Product, ProductError> {
        debug!("Sending request");
        let update = ProductUpdate { price: Some(price) };
        self.inner
            .update(id, update)
            .await
            .map_err(map_targeted(id))
    }
}
