//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for type-safe actor systems
//! that manage resource entities with CRUD operations, custom actions and
//! all-or-nothing transactions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the store for one entity type
//! - [`ResourceClient`] - Type-safe, cloneable handle for talking to an actor
//! - [`ResourceRequest`] - The messages a client sends
//! - [`FrameworkError`] - Failures of the plumbing, plus a slot for entity errors
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

mod actor;
mod client;
mod entity;
mod error;
mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
