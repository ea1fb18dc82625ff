//! # Environment Resolver
//!
//! Decides once, at boot, which adapter family serves every repository.
//!
//! ## Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Boot-Time Resolution                                 │
//! │                                                                         │
//! │  HostContext { bridge: Option<Arc<dyn IpcBridge>> }                    │
//! │       │                                                                 │
//! │       │  Platform::detect (pure existence check)                       │
//! │       ▼                                                                 │
//! │  ┌──────────────────────┐        ┌──────────────────────────────┐      │
//! │  │ Platform::Desktop(b) │        │ Platform::Web                │      │
//! │  └──────────┬───────────┘        └──────────────┬───────────────┘      │
//! │             │ RepositorySet::resolve (consumes the platform)            │
//! │             ▼                                   ▼                       │
//! │  Ipc{Customer,Appointment,Staff,Service}  Http{...} on config base URL │
//! │                                                                         │
//! │  One family for every entity. Never both in one process.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Neither environment variables nor the config file take part in the
//! decision; the config only supplies the base URL and the message locale.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::bridge::IpcBridge;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{
    HttpAppointmentRepository, HttpClient, HttpCustomerRepository, HttpServiceRepository,
    HttpStaffRepository,
};
use crate::ipc::{
    IpcAppointmentRepository, IpcClient, IpcCustomerRepository, IpcServiceRepository,
    IpcStaffRepository,
};
use crate::repository::{
    AppointmentRepository, CustomerRepository, ServiceRepository, StaffRepository, TransportKind,
};

// =============================================================================
// Host Context
// =============================================================================

/// What the hosting process provides to the client.
///
/// A desktop shell installs its bridge before boot; a browser-like host
/// installs nothing.
#[derive(Clone, Default)]
pub struct HostContext {
    bridge: Option<Arc<dyn IpcBridge>>,
}

impl HostContext {
    /// An empty context (no bridge).
    pub fn new() -> Self {
        Self::default()
    }

    /// A context with `bridge` installed.
    pub fn with_bridge(bridge: Arc<dyn IpcBridge>) -> Self {
        HostContext {
            bridge: Some(bridge),
        }
    }

    /// Installs (or replaces) the bridge.
    pub fn install_bridge(&mut self, bridge: Arc<dyn IpcBridge>) {
        self.bridge = Some(bridge);
    }

    /// The installed bridge, if any.
    pub fn bridge(&self) -> Option<&Arc<dyn IpcBridge>> {
        self.bridge.as_ref()
    }
}

impl fmt::Debug for HostContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostContext")
            .field("bridge", &self.bridge.is_some())
            .finish()
    }
}

// =============================================================================
// Platform
// =============================================================================

/// Capability descriptor computed once at boot.
#[derive(Clone)]
pub enum Platform {
    /// No host bridge: talk to the REST backend.
    Web,
    /// A host bridge is installed: talk over IPC.
    Desktop(Arc<dyn IpcBridge>),
}

impl Platform {
    /// Checks `host` for an installed bridge.
    pub fn detect(host: &HostContext) -> Platform {
        match host.bridge() {
            Some(bridge) => Platform::Desktop(Arc::clone(bridge)),
            None => Platform::Web,
        }
    }

    /// The transport this platform implies.
    pub fn transport(&self) -> TransportKind {
        match self {
            Platform::Web => TransportKind::Http,
            Platform::Desktop(_) => TransportKind::Ipc,
        }
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Web => write!(f, "Web"),
            Platform::Desktop(_) => write!(f, "Desktop"),
        }
    }
}

// =============================================================================
// Repository Set
// =============================================================================

/// One repository per entity, all from the same adapter family.
pub struct RepositorySet {
    pub customers: Box<dyn CustomerRepository>,
    pub appointments: Box<dyn AppointmentRepository>,
    pub staff: Box<dyn StaffRepository>,
    pub services: Box<dyn ServiceRepository>,
    transport: TransportKind,
}

impl RepositorySet {
    /// Builds every repository for `platform`.
    ///
    /// Fails only when the web target's base URL cannot be used.
    pub fn resolve(platform: Platform, config: &ClientConfig) -> Result<Self, TransportError> {
        let locale = config.locale();
        let transport = platform.transport();

        let set = match platform {
            Platform::Desktop(bridge) => {
                let ipc = IpcClient::new(bridge);
                RepositorySet {
                    customers: Box::new(IpcCustomerRepository::new(ipc.clone(), locale)),
                    appointments: Box::new(IpcAppointmentRepository::new(ipc.clone(), locale)),
                    staff: Box::new(IpcStaffRepository::new(ipc.clone(), locale)),
                    services: Box::new(IpcServiceRepository::new(ipc, locale)),
                    transport,
                }
            }
            Platform::Web => {
                let http = HttpClient::new(&config.api.base_url)?;
                RepositorySet {
                    customers: Box::new(HttpCustomerRepository::new(http.clone(), locale)),
                    appointments: Box::new(HttpAppointmentRepository::new(http.clone(), locale)),
                    staff: Box::new(HttpStaffRepository::new(http.clone(), locale)),
                    services: Box::new(HttpServiceRepository::new(http, locale)),
                    transport,
                }
            }
        };

        info!(%transport, %locale, "Resolved repositories");
        Ok(set)
    }

    /// The transport every repository in this set uses.
    pub fn transport(&self) -> TransportKind {
        self.transport
    }
}

impl fmt::Debug for RepositorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepositorySet")
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}
