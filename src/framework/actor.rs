//! # Generic Actor Server
//!
//! The `ResourceActor` owns the store for one entity type and processes
//! messages one at a time, so it needs no locks around its state.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel.
///
/// **Concurrency Model**: each actor processes its own messages *sequentially*.
/// A request, including every hook it awaits, finishes before the next one is
/// looked at. Two requests to the same actor are therefore serialized, which
/// is the isolation guarantee the order transaction relies on.
///
/// # Operations
///
/// * **Create**: builds the entity with the next id, runs `on_create`, stores
///   it. The id counter only advances when the entity is stored.
/// * **Get** / **List**: return clones of the stored state. `List` is ordered by id.
/// * **Update**: runs `on_update` against a copy and stores the copy only if
///   the hook succeeds.
/// * **Action**: runs `handle_action` on the stored entity.
/// * **Transact**: runs a list of actions against staged copies of the
///   entities they touch. The copies replace the stored entities only when
///   every action succeeded and `check_transaction` accepts the results;
///   any failure discards all of them.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls
    /// wait for space. It must be greater than zero.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "cafe_orders::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::entity(e)));
                                continue;
                            }
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut staged = current.clone();
                    if let Err(e) = staged.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::entity(e)));
                        continue;
                    }
                    self.store.insert(id.clone(), staged.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(staged));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::entity);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Transact {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, ?actions, "Transact");
                    let steps = actions.len();
                    let result = self.transact(actions, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, steps, "Transaction committed"),
                        Err(e) => warn!(entity_type, steps, error = %e, "Transaction aborted"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn transact(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: BTreeMap<T::Id, T> = BTreeMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            // Later actions on the same id see the effects of earlier ones.
            let item = match staged.entry(id) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let current = self
                        .store
                        .get(entry.key())
                        .cloned()
                        .ok_or_else(|| FrameworkError::entity(T::not_found(entry.key())))?;
                    entry.insert(current)
                }
            };
            let result = item
                .handle_action(action, context)
                .await
                .map_err(FrameworkError::entity)?;
            results.push(result);
        }

        T::check_transaction(&results).map_err(FrameworkError::entity)?;
        self.store.extend(staged);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    // --- Test Entity: a tip jar that can be drawn down but never below zero ---

    #[derive(Clone, Debug, PartialEq)]
    struct Jar {
        id: u32,
        coins: u32,
    }

    #[derive(Debug)]
    struct JarCreate {
        coins: u32,
    }

    #[derive(Debug)]
    enum JarAction {
        Take(u32),
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum JarError {
        #[error("jar {0} not found")]
        Missing(u32),
        #[error("jar {id} holds {coins}, asked for {asked}")]
        Short { id: u32, coins: u32, asked: u32 },
        #[error("negative jars are not a thing")]
        Rejected,
        #[error("{0} steps is too many")]
        TooLong(usize),
    }

    #[async_trait]
    impl ActorEntity for Jar {
        type Id = u32;
        type Create = JarCreate;
        type Update = i64;
        type Action = JarAction;
        type ActionResult = u32;
        type Context = ();
        type Error = JarError;

        fn from_create_params(id: u32, params: JarCreate) -> Result<Self, JarError> {
            Ok(Self {
                id,
                coins: params.coins,
            })
        }

        fn not_found(id: &u32) -> JarError {
            JarError::Missing(*id)
        }

        fn check_transaction(results: &[u32]) -> Result<(), JarError> {
            if results.len() > 3 {
                return Err(JarError::TooLong(results.len()));
            }
            Ok(())
        }

        async fn on_update(&mut self, update: i64, _ctx: &()) -> Result<(), JarError> {
            self.coins = 0;
            self.coins = u32::try_from(update).map_err(|_| JarError::Rejected)?;
            Ok(())
        }

        async fn handle_action(&mut self, action: JarAction, _ctx: &()) -> Result<u32, JarError> {
            match action {
                JarAction::Take(asked) => {
                    if self.coins < asked {
                        return Err(JarError::Short {
                            id: self.id,
                            coins: self.coins,
                            asked,
                        });
                    }
                    self.coins -= asked;
                    Ok(self.coins)
                }
            }
        }
    }

    async fn jars(coins: &[u32]) -> ResourceClient<Jar> {
        let (actor, client) = ResourceActor::<Jar>::new(10);
        tokio::spawn(actor.run(()));
        for &c in coins {
            client.create(JarCreate { coins: c }).await.unwrap();
        }
        client
    }

    #[tokio::test]
    async fn test_transaction_commits_every_step() {
        let client = jars(&[10, 5]).await;

        let results = client
            .transact(vec![(1, JarAction::Take(3)), (2, JarAction::Take(5)), (1, JarAction::Take(2))])
            .await
            .unwrap();
        assert_eq!(results, vec![7, 0, 5]);

        let all = client.list().await.unwrap();
        assert_eq!(all, vec![Jar { id: 1, coins: 5 }, Jar { id: 2, coins: 0 }]);
    }

    #[tokio::test]
    async fn test_transaction_failure_discards_earlier_steps() {
        let client = jars(&[10, 5]).await;

        let err = client
            .transact(vec![(1, JarAction::Take(3)), (2, JarAction::Take(6))])
            .await
            .unwrap_err();
        assert_eq!(
            err.into_entity_error::<JarError>().unwrap(),
            JarError::Short { id: 2, coins: 5, asked: 6 }
        );

        assert_eq!(client.get(1).await.unwrap().unwrap().coins, 10);
        assert_eq!(client.get(2).await.unwrap().unwrap().coins, 5);
    }

    #[tokio::test]
    async fn test_rejected_results_discard_every_step() {
        let client = jars(&[10]).await;

        let steps = (0..4).map(|_| (1, JarAction::Take(1))).collect();
        let err = client.transact(steps).await.unwrap_err();
        assert_eq!(err.into_entity_error::<JarError>().unwrap(), JarError::TooLong(4));
        assert_eq!(client.get(1).await.unwrap().unwrap().coins, 10);
    }

    #[tokio::test]
    async fn test_transaction_missing_id_uses_entity_error() {
        let client = jars(&[10]).await;

        let err = client
            .transact(vec![(1, JarAction::Take(1)), (9, JarAction::Take(1))])
            .await
            .unwrap_err();
        assert_eq!(err.into_entity_error::<JarError>().unwrap(), JarError::Missing(9));
        assert_eq!(client.get(1).await.unwrap().unwrap().coins, 10);
    }

    #[tokio::test]
    async fn test_failed_update_leaves_stored_entity_untouched() {
        let client = jars(&[10]).await;

        assert!(client.update(1, -4).await.is_err());
        assert_eq!(client.get(1).await.unwrap().unwrap().coins, 10);

        let updated = client.update(1, 42).await.unwrap();
        assert_eq!(updated.coins, 42);
    }

    #[tokio::test]
    async fn test_single_action_on_missing_id_is_not_found() {
        let client = jars(&[]).await;
        let err = client.perform_action(3, JarAction::Take(1)).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "3"));
    }
}
