//! # Appointment Store
//!
//! Holds either the whole calendar (`fetch_all`) or one customer's bookings
//! (`fetch_all_by_customer_id`). Both replace the collection and share the
//! same fetch tickets, so switching customers quickly never shows the
//! previous customer's list last.

use tokio::sync::watch;
use tracing::debug;

use salon_core::{Appointment, AppointmentStatus, CreateAppointmentDto, UpdateAppointmentDto};
use salon_data::{AppointmentRepository, TransportKind};

use crate::state::{append, remove, replace, upsert, StoreCore, StoreState};

pub struct AppointmentStore {
    repo: Box<dyn AppointmentRepository>,
    core: StoreCore<Appointment>,
}

impl AppointmentStore {
    pub fn new(repo: Box<dyn AppointmentRepository>) -> Self {
        AppointmentStore {
            repo,
            core: StoreCore::new("appointments"),
        }
    }

    /// Replaces the collection with every appointment.
    pub async fn fetch_all(&self) -> bool {
        self.core.replace_all(self.repo.get_all()).await
    }

    /// Replaces the collection with one customer's appointments.
    pub async fn fetch_all_by_customer_id(&self, customer_id: &str) -> bool {
        debug!(%customer_id, "Loading appointments for customer");
        self.core
            .replace_all(self.repo.get_all_by_customer_id(customer_id))
            .await
    }

    pub async fn fetch_by_id(&self, id: &str) -> bool {
        self.core.apply(self.repo.get_by_id(id), upsert).await
    }

    /// Books an appointment and appends it.
    pub async fn create(&self, dto: &CreateAppointmentDto) -> bool {
        self.core.apply(self.repo.create(dto), append).await
    }

    pub async fn update(&self, id: &str, dto: &UpdateAppointmentDto) -> bool {
        self.core
            .apply(self.repo.update(id, dto), |items, appt| replace(items, appt))
            .await
    }

    /// Status-only update (complete, cancel, no-show).
    pub async fn set_status(&self, id: &str, status: AppointmentStatus) -> bool {
        self.update(id, &UpdateAppointmentDto::status(status)).await
    }

    pub async fn remove(&self, id: &str) -> bool {
        let id = id.to_string();
        self.core
            .apply(self.repo.delete(&id), |items, ()| remove(items, &id))
            .await
    }

    pub fn clear_error(&self) {
        self.core.clear_error();
    }

    pub fn snapshot(&self) -> StoreState<Appointment> {
        self.core.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<Appointment>> {
        self.core.subscribe()
    }

    pub fn transport(&self) -> TransportKind {
        self.repo.transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAppointments;

    fn seeded() -> FakeAppointments {
        FakeAppointments::with(vec![
            Appointment::new("a1", "1"),
            Appointment::new("a2", "2"),
            Appointment::new("a3", "1"),
        ])
    }

    #[tokio::test]
    async fn test_fetch_by_customer_replaces_collection() {
        let repo = seeded();
        let store = AppointmentStore::new(Box::new(repo.clone()));

        assert!(store.fetch_all().await);
        assert_eq!(store.snapshot().items.len(), 3);

        assert!(store.fetch_all_by_customer_id("1").await);
        let ids: Vec<String> = store.snapshot().items.into_iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["a1", "a3"]);
    }

    #[tokio::test]
    async fn test_switching_customers_keeps_latest_request() {
        let repo = seeded();
        let store = AppointmentStore::new(Box::new(repo.clone()));
        let slow = repo.gate_next_read();

        let first = store.fetch_all_by_customer_id("1");
        let second = store.fetch_all_by_customer_id("2");
        let release = async move {
            tokio::task::yield_now().await;
            slow.open();
        };
        let (first_ok, second_ok, ()) = tokio::join!(first, second, release);
        assert!(first_ok && second_ok);

        let items = store.snapshot().items;
        assert_eq!(items, vec![Appointment::new("a2", "2")]);
    }

    #[tokio::test]
    async fn test_status_change_and_removal() {
        let repo = seeded();
        let store = AppointmentStore::new(Box::new(repo.clone()));
        store.fetch_all_by_customer_id("1").await;

        assert!(store.set_status("a3", AppointmentStatus::Completed).await);
        let items = store.snapshot().items;
        assert_eq!(items[1].status, AppointmentStatus::Completed);
        assert_eq!(items[0].status, AppointmentStatus::Scheduled);

        assert!(store.remove("a1").await);
        assert_eq!(store.snapshot().items.len(), 1);
    }

    #[tokio::test]
    async fn test_create_failure_is_isolated() {
        let repo = seeded();
        let store = AppointmentStore::new(Box::new(repo.clone()));
        store.fetch_all().await;
        let before = store.snapshot().items;

        repo.fail_writes(true);
        assert!(!store.create(&CreateAppointmentDto::new("2")).await);

        let state = store.snapshot();
        assert_eq!(state.items, before);
        assert_eq!(state.error.as_deref(), Some("예약 생성에 실패했습니다."));

        repo.fail_writes(false);
        assert!(store.create(&CreateAppointmentDto::new("2")).await);
        let state = store.snapshot();
        assert_eq!(state.items.len(), before.len() + 1);
        assert_eq!(state.error, None);
    }
}
