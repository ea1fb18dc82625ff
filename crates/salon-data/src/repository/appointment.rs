//! Appointment repository contract.

use async_trait::async_trait;

use salon_core::{Appointment, CreateAppointmentDto, UpdateAppointmentDto};

use super::{RepoResult, TransportKind};

/// Persistence operations the UI needs for appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// The transport this repository talks over.
    fn transport(&self) -> TransportKind;

    /// Fetches every appointment (calendar view).
    async fn get_all(&self) -> RepoResult<Vec<Appointment>>;

    /// Fetches the appointments of one customer.
    async fn get_all_by_customer_id(&self, customer_id: &str) -> RepoResult<Vec<Appointment>>;

    /// Fetches one appointment.
    async fn get_by_id(&self, id: &str) -> RepoResult<Appointment>;

    /// Books an appointment and returns it with its server-assigned id.
    async fn create(&self, dto: &CreateAppointmentDto) -> RepoResult<Appointment>;

    /// Applies a partial edit and returns the updated appointment.
    async fn update(&self, id: &str, dto: &UpdateAppointmentDto) -> RepoResult<Appointment>;

    /// Deletes an appointment.
    async fn delete(&self, id: &str) -> RepoResult<()>;
}
