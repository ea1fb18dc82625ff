//! Read-only catalogs: staff and the service menu.

use async_trait::async_trait;

use salon_core::{Service, Staff};

use super::{RepoResult, TransportKind};

#[async_trait]
pub trait StaffRepository: Send + Sync {
    fn transport(&self) -> TransportKind;

    /// Fetches every staff member.
    async fn get_all(&self) -> RepoResult<Vec<Staff>>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    fn transport(&self) -> TransportKind;

    /// Fetches the service menu.
    async fn get_all(&self) -> RepoResult<Vec<Service>>;
}
