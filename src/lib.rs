//! # Cafe Orders
//!
//! > **The ordering backend of a small café, built from resource-oriented actors.**
//!
//! Customers browse a catalog of products and place orders. Placing an order
//! validates every requested line against live stock, prices it, takes the
//! stock and stores the order, all or nothing. Stock never goes negative,
//! an order's total always equals the sum of its lines, and two customers
//! racing for the last croissant cannot both get it.
//!
//! ## Core Concepts
//!
//! ### One actor per resource
//! Each resource type (products, orders) lives in its own Tokio task, a
//! [`ResourceActor`](framework::ResourceActor) that owns the data and handles
//! one request at a time. Nothing else can touch the data, so no locks are
//! needed, and a request's read-check-write sequence cannot interleave with
//! another request.
//!
//! ### Transactions are a single actor turn
//! An order's stock reservation is one
//! [`Transact`](framework::ResourceRequest::Transact) request to the Product
//! actor: every line is applied to staged copies of the products, and the
//! copies are written back only if every line succeeded. The Order actor
//! sends that request from the order's `on_create` hook and stores the order
//! only when it succeeds.
//!
//! ### Mocking
//! Any client can be backed by a [`MockClient`](framework::mock::MockClient),
//! so the Order actor can be tested against a scripted catalog.
//!
//! ## Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each actor defines its own error type ([`ProductError`](product_actor::ProductError),
//! [`OrderError`](order_actor::OrderError)). Errors cross the framework boxed
//! and the typed clients downcast them back, so callers can match on the
//! exact failure, ids and quantities included.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected when an actor starts running, not when it is
//! created. The Order actor receives its `ProductClient` this way.
//!
//! ### 3. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, client, messages and the [`ActorEntity`](framework::ActorEntity) trait.
//!
//! ### 2. The Orchestrator ([`lifecycle`], [`config`])
//! [`CafeSystem`](lifecycle::CafeSystem) spawns and wires the actors, seeds
//! the catalog from a [`CafeConfig`](config::CafeConfig) and shuts down.
//!
//! ### 3. The Interface ([`clients`], [`api`])
//! [`ProductClient`](clients::ProductClient) and [`OrderClient`](clients::OrderClient)
//! hide the message passing; [`CafeApi`](api::CafeApi) maps their results to
//! HTTP status codes and JSON bodies.
//!
//! ### 4. The Implementation ([`product_actor`], [`order_actor`], [`model`])
//! The café's entities and their business rules.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod product_actor;
