//! # Store Provider
//!
//! Composition root: builds one store per entity from a resolved
//! [`RepositorySet`] and hands out shared handles.
//!
//! ## Boot
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Boot Sequence                                   │
//! │                                                                         │
//! │  HostContext ──► Platform::detect ──► RepositorySet::resolve(config)   │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                                       StoreProvider::new                │
//! │                                              │                          │
//! │      ┌──────────────────┬───────────────────┼──────────────────┐       │
//! │      ▼                  ▼                   ▼                  ▼        │
//! │  CustomerStore   AppointmentStore      StaffStore        ServiceStore   │
//! │  (Arc)           (Arc)                 (Arc)             (Arc)          │
//! │                                                                         │
//! │  The UI receives the provider; no store is a global.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use salon_data::{ClientConfig, HostContext, Platform, RepositorySet, TransportError, TransportKind};

use crate::appointment::AppointmentStore;
use crate::catalog::{ServiceStore, StaffStore};
use crate::customer::CustomerStore;

/// Owns every store for the lifetime of the client.
#[derive(Clone)]
pub struct StoreProvider {
    customers: Arc<CustomerStore>,
    appointments: Arc<AppointmentStore>,
    staff: Arc<StaffStore>,
    services: Arc<ServiceStore>,
    transport: TransportKind,
}

impl StoreProvider {
    /// Injects each repository into its store.
    pub fn new(repos: RepositorySet) -> Self {
        let transport = repos.transport();

        StoreProvider {
            customers: Arc::new(CustomerStore::new(repos.customers)),
            appointments: Arc::new(AppointmentStore::new(repos.appointments)),
            staff: Arc::new(StaffStore::new(repos.staff)),
            services: Arc::new(ServiceStore::new(repos.services)),
            transport,
        }
    }

    /// Detects the platform, resolves repositories and builds the stores.
    pub fn boot(host: &HostContext, config: &ClientConfig) -> Result<Self, TransportError> {
        let platform = Platform::detect(host);
        info!(?platform, "Booting stores");

        let repos = RepositorySet::resolve(platform, config)?;
        Ok(Self::new(repos))
    }

    pub fn customers(&self) -> Arc<CustomerStore> {
        Arc::clone(&self.customers)
    }

    pub fn appointments(&self) -> Arc<AppointmentStore> {
        Arc::clone(&self.appointments)
    }

    pub fn staff(&self) -> Arc<StaffStore> {
        Arc::clone(&self.staff)
    }

    pub fn services(&self) -> Arc<ServiceStore> {
        Arc::clone(&self.services)
    }

    /// The transport chosen at boot.
    pub fn transport(&self) -> TransportKind {
        self.transport
    }
}
