//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the café's actors.
//!
//! **Key Responsibilities:**
//! 1. **Actor Creation** - Instantiate the Product and Order actors and their clients
//! 2. **Dependency Injection** - Hand the Order actor its `ProductClient` via `run(context)`
//! 3. **Seeding** - Fill the catalog before any order can arrive
//! 4. **Graceful Shutdown** - Drop every client and wait for the actors to drain
//! 5. **Observability Setup** - Initialize tracing ([`setup_tracing`])
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without their dependencies and receive them when they
//! start running ("late binding"):
//!
//! ```rust,ignore
//! // No dependencies
//! impl ActorEntity for Product {
//!     type Context = ();
//! }
//!
//! // Reserves stock while creating an order
//! impl ActorEntity for Order {
//!     type Context = ProductClient;
//! }
//! ```
//!
//! ## Shutdown Order
//!
//! The Order actor holds a `ProductClient`, so the Product actor only stops
//! once the Order actor has stopped and dropped its context. `shutdown`
//! therefore waits for the Order actor first.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
pub use tracing::*;
