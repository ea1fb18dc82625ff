//! # Store State Core
//!
//! The loading/error state machine every entity store is built on.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Action Lifecycle                               │
//! │                                                                         │
//! │  ┌──────┐  action   ┌─────────┐   Ok(v)    ┌─────────┐                 │
//! │  │ Idle │ ────────► │ Loading │ ─────────► │ Success │  error = None   │
//! │  └──────┘           └────┬────┘            └─────────┘                 │
//! │                          │  Err(e)         ┌─────────┐                 │
//! │                          └───────────────► │ Failed  │  error = msg    │
//! │                                            └─────────┘  items kept     │
//! │                                                                         │
//! │  Entering Loading clears `error`. is_loading = (actions in flight > 0),│
//! │  counted down on completion and when an action future is dropped.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Overlapping Fetches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  fetch #1 ──────────────────────────────────────► done (stale, dropped)│
//! │       fetch #2 ─────────────► done (latest, applied)                   │
//! │                                                                         │
//! │  Every collection-replacing fetch takes a ticket. A result is applied  │
//! │  only if its ticket is still the newest one issued.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

use salon_core::Entity;
use salon_data::RepoResult;

// =============================================================================
// Store State
// =============================================================================

/// What the UI renders for one entity kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState<E> {
    /// Entities in fetch/creation order.
    pub items: Vec<E>,
    /// True while any action of this store is in flight.
    pub is_loading: bool,
    /// Localized message of the last failure, cleared when the next action starts.
    pub error: Option<String>,
}

impl<E> Default for StoreState<E> {
    fn default() -> Self {
        StoreState {
            items: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

// =============================================================================
// Store Core
// =============================================================================

#[derive(Debug, Default)]
struct Ledger {
    in_flight: usize,
    latest_fetch: u64,
}

/// Shared machinery behind every entity store.
///
/// State lives in a `watch` channel so subscribers see every transition.
/// The ledger mutex is never held across an `.await`.
#[derive(Debug)]
pub(crate) struct StoreCore<E> {
    name: &'static str,
    state: watch::Sender<StoreState<E>>,
    ledger: Mutex<Ledger>,
}

impl<E: Entity> StoreCore<E> {
    pub fn new(name: &'static str) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        StoreCore {
            name,
            state,
            ledger: Mutex::new(Ledger::default()),
        }
    }

    pub fn snapshot(&self) -> StoreState<E> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<E>> {
        self.state.subscribe()
    }

    pub fn clear_error(&self) {
        self.state.send_if_modified(|state| state.error.take().is_some());
    }

    /// Marks one action as started: Loading is `is_loading = true` with no
    /// error. Collection-replacing fetches also take a new ticket.
    fn begin(&self, replaces_collection: bool) -> InFlight<'_, E> {
        let mut ledger = self.ledger.lock().expect("Store ledger poisoned");
        ledger.in_flight += 1;
        if replaces_collection {
            ledger.latest_fetch += 1;
        }
        self.state.send_modify(|state| {
            state.is_loading = true;
            state.error = None;
        });

        InFlight {
            core: self,
            ticket: ledger.latest_fetch,
            settled: false,
        }
    }

    /// Decrements the in-flight count and publishes `update` in the same
    /// transition as the new `is_loading`.
    fn settle<U>(&self, update: U)
    where
        U: FnOnce(&Ledger, &mut StoreState<E>),
    {
        // Also runs from Drop, possibly while unwinding.
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        ledger.in_flight = ledger.in_flight.saturating_sub(1);
        let still_loading = ledger.in_flight > 0;

        self.state.send_modify(|state| {
            state.is_loading = still_loading;
            update(&*ledger, state);
        });
    }

    /// Runs a collection-replacing fetch.
    ///
    /// Returns whether the repository call succeeded, even when the result
    /// was discarded as stale.
    pub async fn replace_all<F>(&self, fetch: F) -> bool
    where
        F: Future<Output = RepoResult<Vec<E>>>,
    {
        let flight = self.begin(true);
        let ticket = flight.ticket;

        debug!(store = self.name, ticket, "Fetching collection");
        let result = fetch.await;
        let succeeded = result.is_ok();

        flight.finish(|ledger, state| {
            if ticket != ledger.latest_fetch {
                debug!(
                    store = self.name,
                    ticket,
                    latest = ledger.latest_fetch,
                    "Discarding stale fetch result"
                );
                return;
            }
            match result {
                Ok(items) => {
                    state.items = items;
                    state.error = None;
                }
                Err(err) => state.error = Some(err.message),
            }
        });

        succeeded
    }

    /// Runs a single-entity action and folds its result into the collection.
    pub async fn apply<T, F, A>(&self, action: F, on_success: A) -> bool
    where
        F: Future<Output = RepoResult<T>>,
        A: FnOnce(&mut Vec<E>, T),
    {
        let flight = self.begin(false);

        let result = action.await;
        let succeeded = result.is_ok();

        flight.finish(|_, state| match result {
            Ok(value) => {
                on_success(&mut state.items, value);
                state.error = None;
            }
            Err(err) => {
                debug!(store = self.name, code = ?err.code, "Action failed");
                state.error = Some(err.message);
            }
        });

        succeeded
    }
}

/// One started action. Settles the store when finished, or when the
/// action's future is dropped before completing.
struct InFlight<'a, E: Entity> {
    core: &'a StoreCore<E>,
    ticket: u64,
    settled: bool,
}

impl<E: Entity> InFlight<'_, E> {
    fn finish<U>(mut self, update: U)
    where
        U: FnOnce(&Ledger, &mut StoreState<E>),
    {
        self.settled = true;
        self.core.settle(update);
    }
}

impl<E: Entity> Drop for InFlight<'_, E> {
    fn drop(&mut self) {
        if !self.settled {
            debug!(store = self.core.name, ticket = self.ticket, "Action abandoned");
            self.core.settle(|_, _| {});
        }
    }
}

// =============================================================================
// Collection Edits
// =============================================================================

/// Appends a newly created entity.
pub(crate) fn append<E: Entity>(items: &mut Vec<E>, entity: E) {
    items.push(entity);
}

/// Replaces the entity with the same id, or appends it.
pub(crate) fn upsert<E: Entity>(items: &mut Vec<E>, entity: E) {
    match items.iter_mut().find(|e| e.id() == entity.id()) {
        Some(slot) => *slot = entity,
        None => items.push(entity),
    }
}

/// Replaces the entity with the same id in place. Unknown ids are ignored.
pub(crate) fn replace<E: Entity>(items: &mut [E], entity: E) {
    if let Some(slot) = items.iter_mut().find(|e| e.id() == entity.id()) {
        *slot = entity;
    }
}

/// Drops every entity with `id`.
pub(crate) fn remove<E: Entity>(items: &mut Vec<E>, id: &E::Id) {
    items.retain(|e| e.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use salon_core::Customer;
    use salon_data::{ErrorCode, RepositoryError};
    use tokio::sync::oneshot;

    fn kim() -> Customer {
        Customer::new(1, "Kim")
    }

    #[test]
    fn test_collection_edits() {
        let mut items = vec![kim()];

        upsert(&mut items, Customer::new(1, "Kim Minji"));
        assert_eq!(items, vec![Customer::new(1, "Kim Minji")]);

        upsert(&mut items, Customer::new(2, "Lee"));
        assert_eq!(items.len(), 2);

        replace(&mut items, Customer::new(9, "Ghost"));
        assert_eq!(items.len(), 2);

        remove(&mut items, &1);
        assert_eq!(items, vec![Customer::new(2, "Lee")]);

        append(&mut items, kim());
        assert_eq!(items.last(), Some(&kim()));
    }

    #[tokio::test]
    async fn test_failure_keeps_items_and_success_clears_error() {
        let core = StoreCore::<Customer>::new("customers");
        assert!(core.replace_all(async { Ok(vec![kim()]) }).await);

        let failed = core
            .apply(
                async { Err::<Customer, _>(RepositoryError::new(ErrorCode::CreateFailed, "boom")) },
                append,
            )
            .await;
        assert!(!failed);

        let state = core.snapshot();
        assert_eq!(state.items, vec![kim()]);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);

        assert!(core.replace_all(async { Ok(vec![kim()]) }).await);
        assert_eq!(core.snapshot().error, None);
    }

    #[tokio::test]
    async fn test_clear_error_touches_nothing_else() {
        let core = StoreCore::<Customer>::new("customers");
        core.replace_all(async { Ok(vec![kim()]) }).await;
        core.replace_all(async { Err(RepositoryError::new(ErrorCode::LoadFailed, "x")) })
            .await;

        let mut rx = core.subscribe();
        rx.borrow_and_update();

        core.clear_error();
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            core.snapshot(),
            StoreState {
                items: vec![kim()],
                is_loading: false,
                error: None,
            }
        );

        rx.borrow_and_update();
        core.clear_error();
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_stale_fetch_is_discarded() {
        let core = StoreCore::<Customer>::new("customers");
        let (old_tx, old_rx) = oneshot::channel::<RepoResult<Vec<Customer>>>();
        let (new_tx, new_rx) = oneshot::channel::<RepoResult<Vec<Customer>>>();

        let first = core.replace_all(async move { old_rx.await.unwrap() });
        let second = core.replace_all(async move { new_rx.await.unwrap() });
        let driver = async move {
            new_tx.send(Ok(vec![Customer::new(2, "Lee")])).unwrap();
            tokio::task::yield_now().await;
            old_tx.send(Ok(vec![kim()])).unwrap();
        };

        let (first_ok, second_ok, ()) = tokio::join!(first, second, driver);
        assert!(first_ok && second_ok);

        let state = core.snapshot();
        assert_eq!(state.items, vec![Customer::new(2, "Lee")]);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_loading_while_in_flight() {
        let core = StoreCore::<Customer>::new("customers");
        let (tx, rx) = oneshot::channel::<RepoResult<Vec<Customer>>>();
        let mut watcher = core.subscribe();

        let fetch = core.replace_all(async move { rx.await.unwrap() });
        let observe = async move {
            watcher.changed().await.unwrap();
            assert!(watcher.borrow_and_update().is_loading);
            tx.send(Ok(vec![])).unwrap();
        };

        let (ok, ()) = tokio::join!(fetch, observe);
        assert!(ok);
        assert!(!core.snapshot().is_loading);
    }

    #[tokio::test]
    async fn test_loading_clears_previous_error() {
        let core = StoreCore::<Customer>::new("customers");
        core.replace_all(async { Err(RepositoryError::new(ErrorCode::LoadFailed, "old")) })
            .await;
        assert_eq!(core.snapshot().error.as_deref(), Some("old"));

        let (tx, rx) = oneshot::channel::<RepoResult<Vec<Customer>>>();
        let mut watcher = core.subscribe();
        watcher.borrow_and_update();

        let fetch = core.replace_all(async move { rx.await.unwrap() });
        let observe = async move {
            watcher.changed().await.unwrap();
            let loading = watcher.borrow_and_update().clone();
            assert!(loading.is_loading);
            assert_eq!(loading.error, None);
            tx.send(Ok(vec![kim()])).unwrap();
        };

        let (ok, ()) = tokio::join!(fetch, observe);
        assert!(ok);
        assert_eq!(
            core.snapshot(),
            StoreState {
                items: vec![kim()],
                is_loading: false,
                error: None,
            }
        );
    }

    #[tokio::test]
    async fn test_dropped_action_does_not_stick_loading() {
        let core = StoreCore::<Customer>::new("customers");
        let (_tx, rx) = oneshot::channel::<RepoResult<Vec<Customer>>>();

        tokio::select! {
            biased;
            _ = core.replace_all(async move { rx.await.unwrap() }) => unreachable!(),
            _ = std::future::ready(()) => {}
        }
        assert!(!core.snapshot().is_loading);

        let (_tx, rx) = oneshot::channel::<RepoResult<Customer>>();
        tokio::select! {
            biased;
            _ = core.apply(async move { rx.await.unwrap() }, append) => unreachable!(),
            _ = std::future::ready(()) => {}
        }
        assert!(!core.snapshot().is_loading);

        assert!(core.replace_all(async { Ok(vec![kim()]) }).await);
        let state = core.snapshot();
        assert!(!state.is_loading);
        assert_eq!(state.items, vec![kim()]);
    }
}
