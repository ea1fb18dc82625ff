//! # Customer Store

use tokio::sync::watch;
use tracing::debug;

use salon_core::{CreateCustomerDto, Customer, UpdateCustomerDto};
use salon_data::{CustomerRepository, TransportKind};

use crate::state::{append, remove, replace, upsert, StoreCore, StoreState};

/// Customer list state plus the actions that change it.
///
/// ## Usage
/// ```rust,ignore
/// let customers = provider.customers();
/// if !customers.create(&CreateCustomerDto::new("Lee")).await {
///     show_toast(customers.snapshot().error.unwrap_or_default());
/// }
/// ```
pub struct CustomerStore {
    repo: Box<dyn CustomerRepository>,
    core: StoreCore<Customer>,
}

impl CustomerStore {
    /// Creates an empty store over `repo`.
    pub fn new(repo: Box<dyn CustomerRepository>) -> Self {
        CustomerStore {
            repo,
            core: StoreCore::new("customers"),
        }
    }

    /// Replaces the list with the backend's.
    pub async fn fetch_all(&self) -> bool {
        self.core.replace_all(self.repo.get_all()).await
    }

    /// Fetches one customer and inserts or refreshes it in the list.
    pub async fn fetch_by_id(&self, id: i64) -> bool {
        self.core.apply(self.repo.get_by_id(id), upsert).await
    }

    /// Creates a customer and appends the persisted entity.
    pub async fn create(&self, dto: &CreateCustomerDto) -> bool {
        debug!(name = %dto.name, "Creating customer");
        self.core.apply(self.repo.create(dto), append).await
    }

    /// Edits a customer and swaps the updated entity in place.
    pub async fn update(&self, id: i64, dto: &UpdateCustomerDto) -> bool {
        self.core
            .apply(self.repo.update(id, dto), |items, customer| {
                replace(items, customer)
            })
            .await
    }

    /// Deletes a customer and drops it from the list.
    pub async fn remove(&self, id: i64) -> bool {
        self.core
            .apply(self.repo.delete(id), |items, ()| remove(items, &id))
            .await
    }

    pub fn clear_error(&self) {
        self.core.clear_error();
    }

    pub fn snapshot(&self) -> StoreState<Customer> {
        self.core.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<Customer>> {
        self.core.subscribe()
    }

    pub fn transport(&self) -> TransportKind {
        self.repo.transport()
    }
}
