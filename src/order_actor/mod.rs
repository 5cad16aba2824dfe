//! Order-specific resource logic and entity implementation.
//!
//! The Order actor's context is a [`ProductClient`]: placing an order
//! reserves catalog stock from inside the order's `on_create` hook.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// The actor still needs its [`ProductClient`](crate::clients::ProductClient)
/// context, passed to `run()`.
pub fn new(mailbox_capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_capacity);
    (actor, OrderClient::new(generic_client))
}
