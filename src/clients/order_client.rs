use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, OrderLineRequest};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Placing an order is a single `create` request. Validation and the stock
/// reservation happen in the Order actor's `on_create` hook, inside the
/// actor's turn for that request.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Places an order and returns it as stored.
    ///
    /// Not idempotent: calling this twice with the same arguments places two
    /// orders and reserves stock twice.
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub async fn create_order(
        &self,
        customer_name: &str,
        lines: Vec<OrderLineRequest>,
    ) -> Result<Order, OrderError> {
        debug!(?lines, "create_order called");
        info!("Sending create_order to actor");

        let id = self
            .inner
            .create(OrderCreate::new(customer_name, lines))
            .await
            .map_err(Self::map_error)?;

        self.get(id).await?.ok_or_else(|| {
            OrderError::TransientStorageFailure(format!("{id} was created but cannot be read back"))
        })
    }

    /// Fetches a stored order. `Ok(None)` when no order has that id.
    pub async fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
