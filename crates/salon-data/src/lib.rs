//! # salon-data: Repository Layer for the Salon Client
//!
//! Makes one client codebase environment-agnostic: the same repository traits
//! are served either by REST calls or by named-channel calls over a bridge
//! installed by a host desktop shell.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Salon Client Data Flow                           │
//! │                                                                         │
//! │  Store action (fetch_all, create)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     salon-data (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌─────────────────────────────────────┐  │   │
//! │  │   │  Repository   │   │ RepositorySet::resolve(platform)    │  │   │
//! │  │   │  traits       │◄──│   Web     → http::*Repository       │  │   │
//! │  │   │               │   │   Desktop → ipc::*Repository        │  │   │
//! │  │   └───────────────┘   └─────────────────────────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   TransportError ──(logged)──► RepositoryError (localized)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  REST backend (/api/...)          Host bridge invoke("customer:getAll")│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`repository`] - Per-entity repository contracts
//! - [`http`] - REST adapters
//! - [`ipc`] - Host-bridge adapters
//! - [`bridge`] - The bridge trait and the host-side channel router
//! - [`channel`] - The IPC channel vocabulary
//! - [`resolver`] - Bridge detection and adapter selection
//! - [`config`] - Client configuration
//! - [`messages`] - Localized failure messages
//! - [`error`] - Transport, repository and config errors
//!
//! ## Usage
//!
//! ```rust,ignore
//! use salon_data::{ClientConfig, HostContext, Platform, RepositorySet};
//!
//! let config = ClientConfig::load_or_default(None);
//! let platform = Platform::detect(&HostContext::new());
//! let repos = RepositorySet::resolve(platform, &config)?;
//!
//! let customers = repos.customers.get_all().await?;
//! ```

pub mod bridge;
pub mod channel;
pub mod config;
pub mod error;
pub mod http;
pub mod ipc;
pub mod messages;
pub mod repository;
pub mod resolver;

pub use bridge::{BridgeError, ChannelRouter, IpcBridge};
pub use channel::Channel;
pub use config::ClientConfig;
pub use error::{ConfigError, ErrorCode, RepositoryError, TransportError};
pub use messages::{Action, EntityKind, Locale};
pub use repository::{
    AppointmentRepository, CustomerRepository, RepoResult, ServiceRepository, StaffRepository,
    TransportKind,
};
pub use resolver::{HostContext, Platform, RepositorySet};
