//! # salon-store: UI State Containers
//!
//! One store per entity. Each store owns its repository (injected at
//! construction), exposes async actions, and publishes a
//! [`StoreState`] the UI renders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Salon Client State Flow                          │
//! │                                                                         │
//! │  UI event ──► store.create(&dto).await ──► bool                        │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  salon-store (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   StoreProvider ──► CustomerStore / AppointmentStore /          │   │
//! │  │                     StaffStore / ServiceStore                   │   │
//! │  │                          │                                      │   │
//! │  │                          ▼                                      │   │
//! │  │   StoreCore: watch::Sender<StoreState> + fetch tickets          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │                               │                    │
//! │                    ▼                               ▼                    │
//! │  dyn *Repository (salon-data)         watch::Receiver → UI re-render   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract
//! - Actions never return errors. A failure becomes `state.error`, the
//!   collection is left as it was, and the action returns `false`.
//! - No optimistic updates: the collection changes only after the
//!   repository confirms.
//! - `is_loading` is true while any action of the store is in flight.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use salon_data::{ClientConfig, HostContext};
//! use salon_store::StoreProvider;
//!
//! let provider = StoreProvider::boot(&HostContext::new(), &ClientConfig::load_or_default(None))?;
//! let customers = provider.customers();
//!
//! customers.fetch_all().await;
//! for customer in customers.snapshot().items {
//!     println!("{}", customer.name);
//! }
//! ```

pub mod appointment;
pub mod catalog;
pub mod customer;
pub mod provider;
pub mod state;

#[cfg(test)]
mod testing;

pub use appointment::AppointmentStore;
pub use catalog::{ServiceStore, StaffStore};
pub use customer::CustomerStore;
pub use provider::StoreProvider;
pub use state::StoreState;
