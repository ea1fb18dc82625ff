//! Staff and service-menu stores. Read-only: they only ever fetch.

use tokio::sync::watch;

use salon_core::{Service, Staff};
use salon_data::{ServiceRepository, StaffRepository, TransportKind};

use crate::state::{StoreCore, StoreState};

pub struct StaffStore {
    repo: Box<dyn StaffRepository>,
    core: StoreCore<Staff>,
}

impl StaffStore {
    pub fn new(repo: Box<dyn StaffRepository>) -> Self {
        StaffStore {
            repo,
            core: StoreCore::new("staff"),
        }
    }

    pub async fn fetch_all(&self) -> bool {
        self.core.replace_all(self.repo.get_all()).await
    }

    /// Staff members that can currently take bookings.
    pub fn active(&self) -> Vec<Staff> {
        self.core
            .snapshot()
            .items
            .into_iter()
            .filter(|s| s.is_active)
            .collect()
    }

    pub fn clear_error(&self) {
        self.core.clear_error();
    }

    pub fn snapshot(&self) -> StoreState<Staff> {
        self.core.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<Staff>> {
        self.core.subscribe()
    }

    pub fn transport(&self) -> TransportKind {
        self.repo.transport()
    }
}

pub struct ServiceStore {
    repo: Box<dyn ServiceRepository>,
    core: StoreCore<Service>,
}

impl ServiceStore {
    pub fn new(repo: Box<dyn ServiceRepository>) -> Self {
        ServiceStore {
            repo,
            core: StoreCore::new("services"),
        }
    }

    pub async fn fetch_all(&self) -> bool {
        self.core.replace_all(self.repo.get_all()).await
    }

    pub fn clear_error(&self) {
        self.core.clear_error();
    }

    pub fn snapshot(&self) -> StoreState<Service> {
        self.core.snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreState<Service>> {
        self.core.subscribe()
    }

    pub fn transport(&self) -> TransportKind {
        self.repo.transport()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeServices, FakeStaff};

    #[tokio::test]
    async fn test_staff_store_filters_active() {
        let store = StaffStore::new(Box::new(FakeStaff::with(vec![
            Staff {
                id: 1,
                name: "Park".to_string(),
                role: Some("designer".to_string()),
                phone: None,
                is_active: true,
            },
            Staff {
                id: 2,
                name: "Choi".to_string(),
                role: None,
                phone: None,
                is_active: false,
            },
        ])));

        assert!(store.active().is_empty());
        assert!(store.fetch_all().await);
        assert_eq!(store.snapshot().items.len(), 2);

        let active = store.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Park");
    }

    #[tokio::test]
    async fn test_service_store_failure_and_clear() {
        let store = ServiceStore::new(Box::new(FakeServices::failing()));

        assert!(!store.fetch_all().await);
        let state = store.snapshot();
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("서비스 목록을 불러오는데 실패했습니다."));

        store.clear_error();
        assert_eq!(store.snapshot(), StoreState::default());
    }
}
