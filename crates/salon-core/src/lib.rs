//! # salon-core: Domain Vocabulary for the Salon Client
//!
//! Plain data shapes for customers, appointments, staff and the service menu,
//! plus the DTOs the client sends when it creates or edits them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Salon Client Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    UI (web or desktop shell)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store actions                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    salon-store (Stores)                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ repository calls                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             salon-data (HTTP / IPC adapters)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ decoded into                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ salon-core (THIS CRATE) ★                       │   │
//! │  │   Customer • Appointment • Staff • Service • DTOs • validation │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities and DTOs
//! - [`error`] - Domain error types
//! - [`validation`] - Structural DTO validation
//!
//! ## Example Usage
//!
//! ```rust
//! use salon_core::CreateCustomerDto;
//!
//! let dto = CreateCustomerDto::new("Kim").with_phone("010-1234-5678");
//! assert!(dto.validate().is_ok());
//!
//! let empty = CreateCustomerDto::new("  ");
//! assert!(empty.validate().is_err());
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::{CoreError, ValidationError};
pub use types::*;

/// Maximum length of a person or service name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a free-form memo.
pub const MAX_MEMO_LEN: usize = 500;

/// Longest appointment the booking UI accepts, in minutes (8 hours).
pub const MAX_APPOINTMENT_MINUTES: u32 = 480;
