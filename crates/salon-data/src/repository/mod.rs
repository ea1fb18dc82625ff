//! # Repository Module
//!
//! Per-entity repository contracts, independent of transport.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Store                                                                  │
//! │       │  repo.get_all().await                                           │
//! │       ▼                                                                 │
//! │  dyn CustomerRepository                                                 │
//! │  ├── http::HttpCustomerRepository  ── GET /api/customers                │
//! │  └── ipc::IpcCustomerRepository    ── invoke("customer:getAll")         │
//! │                                                                         │
//! │  Each trait declares exactly what the UI needs for that entity,        │
//! │  never a generic CRUD surface. Every method is async and fails only    │
//! │  with RepositoryError.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`] - customer list, detail, create, edit, delete
//! - [`AppointmentRepository`] - bookings, filtered by customer
//! - [`StaffRepository`] - staff list
//! - [`ServiceRepository`] - service menu

use std::fmt;

use serde::Serialize;

use crate::error::RepositoryError;

pub mod appointment;
pub mod catalog;
pub mod customer;

pub use appointment::AppointmentRepository;
pub use catalog::{ServiceRepository, StaffRepository};
pub use customer::CustomerRepository;

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepositoryError>;

/// Which transport backs a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    /// REST over HTTP.
    Http,
    /// Named channels over the host bridge.
    Ipc,
}

impl fmt::Display for TransportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportKind::Http => write!(f, "http"),
            TransportKind::Ipc => write!(f, "ipc"),
        }
    }
}
