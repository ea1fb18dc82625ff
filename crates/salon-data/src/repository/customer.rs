//! Customer repository contract.

use async_trait::async_trait;

use salon_core::{CreateCustomerDto, Customer, UpdateCustomerDto};

use super::{RepoResult, TransportKind};

/// Persistence operations the UI needs for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// The transport this repository talks over.
    fn transport(&self) -> TransportKind;

    /// Fetches every customer.
    async fn get_all(&self) -> RepoResult<Vec<Customer>>;

    /// Fetches one customer.
    async fn get_by_id(&self, id: i64) -> RepoResult<Customer>;

    /// Creates a customer and returns it with its server-assigned id.
    async fn create(&self, dto: &CreateCustomerDto) -> RepoResult<Customer>;

    /// Applies a partial edit and returns the updated customer.
    async fn update(&self, id: i64, dto: &UpdateCustomerDto) -> RepoResult<Customer>;

    /// Deletes a customer.
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
