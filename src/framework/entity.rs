//! # ActorEntity Trait
//!
//! The contract every resource (Product, Order) implements to be managed by the
//! generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! associated types for ids, payloads, actions, context and errors, and the
//! lifecycle hooks the actor calls while it owns the entity.
//!
//! Hooks run inside the actor's message loop. While a hook is awaiting, the
//! actor processes nothing else, which is what makes a hook's read-check-write
//! sequence atomic with respect to every other request to the same actor.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` is handed to
/// `run()` rather than `new()`, so dependencies can be wired after every actor
/// exists ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` for automatic id generation, and ordered
    /// so listings come back in a stable order.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime dependencies injected into the actor. Use `()` for none.
    type Context: Send + Sync;

    /// One error enum per actor, shared by every hook.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from its id and payload. Synchronous, runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The error reported when a transaction names an id the actor does not hold.
    fn not_found(id: &Self::Id) -> Self::Error;

    /// Called with every result of a transaction before it commits.
    /// An error here aborts the transaction; nothing is written back.
    fn check_transaction(_results: &[Self::ActionResult]) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// An error here discards the entity; nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(&mut self, update: Self::Update, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
