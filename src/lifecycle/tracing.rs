//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a `tracing-subscriber` formatter driven by the
//! `RUST_LOG` environment variable.
//!
//! The format is compact and hides the module path (`with_target(false)`);
//! the generic actor tags every event with `entity_type` instead, so lines
//! from the Product and Order actors stay distinguishable.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Request outcomes only
//! RUST_LOG=info cargo run
//!
//! # Full payloads (order lines, reservations)
//! RUST_LOG=debug cargo run
//!
//! # Just the framework
//! RUST_LOG=cafe_orders::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! Placing an order with `RUST_LOG=info`:
//!
//! ```text
//! INFO create_order: Sending create_order to actor lines=2
//! INFO Transaction committed entity_type="Product" steps=2
//! INFO Created entity_type="Order" id=order_1 size=1
//! ```
//!
//! The same order failing on stock:
//!
//! ```text
//! WARN Transaction aborted entity_type="Product" steps=1 error=Entity error: Insufficient stock for product_3: requested 51, available 47
//! WARN on_create failed entity_type="Order" error=Insufficient stock for product product_3. Available: 47, Requested: 51
//! ```
//!
//! Payloads are logged **once** at `debug` level where a request enters a
//! client (`debug!(?lines, ...)`); everything after that stays short.

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type says which actor logged
        .compact()
        .init();
}
