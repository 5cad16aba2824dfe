//! # Generic Messages
//!
//! The request type sent from a [`ResourceClient`](crate::framework::ResourceClient)
//! to its [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every actor manages one type of resource and speaks the same small set of
/// lifecycle operations instead of ad-hoc messages:
///
/// - **Create**: uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get** / **List**: read the current state of one or all resources.
/// - **Update**: uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Action**: executes a custom [`ActorEntity::Action`] on one resource.
/// - **Transact**: executes a sequence of actions, possibly on several
///   resources, as one all-or-nothing unit.
///
/// The enum is generic over `T: ActorEntity`, so a Product payload can never
/// be sent to the Order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Transact {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
}
