//! # IPC Appointment Repository

use async_trait::async_trait;

use salon_core::validation::validate_reference;
use salon_core::{Appointment, CreateAppointmentDto, UpdateAppointmentDto, ValidationError};

use super::{arg, IpcClient};
use crate::channel::Channel;
use crate::error::{RepositoryError, TransportError};
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{AppointmentRepository, RepoResult, TransportKind};

/// [`AppointmentRepository`] over the `appointment:*` channels.
#[derive(Debug, Clone)]
pub struct IpcAppointmentRepository {
    ipc: IpcClient,
    locale: Locale,
}

impl IpcAppointmentRepository {
    pub fn new(ipc: IpcClient, locale: Locale) -> Self {
        IpcAppointmentRepository { ipc, locale }
    }

    fn fail(&self, action: Action) -> impl FnOnce(TransportError) -> RepositoryError {
        let locale = self.locale;
        move |err| RepositoryError::from_transport(locale, EntityKind::Appointment, action, err)
    }

    fn invalid(&self, action: Action) -> impl FnOnce(ValidationError) -> RepositoryError {
        let locale = self.locale;
        move |err| RepositoryError::from_validation(locale, EntityKind::Appointment, action, err)
    }
}

#[async_trait]
impl AppointmentRepository for IpcAppointmentRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Appointment>> {
        self.ipc
            .call(Channel::AppointmentGetAll, vec![])
            .await
            .map_err(self.fail(Action::Load))
    }

    async fn get_all_by_customer_id(&self, customer_id: &str) -> RepoResult<Vec<Appointment>> {
        validate_reference("customerId", customer_id).map_err(self.invalid(Action::Load))?;

        self.ipc
            .call(Channel::AppointmentGetAllByCustomerId, vec![customer_id.into()])
            .await
            .map_err(self.fail(Action::Load))
    }

    async fn get_by_id(&self, id: &str) -> RepoResult<Appointment> {
        self.ipc
            .call(Channel::AppointmentGetById, vec![id.into()])
            .await
            .map_err(self.fail(Action::Get))
    }

    async fn create(&self, dto: &CreateAppointmentDto) -> RepoResult<Appointment> {
        dto.validate().map_err(self.invalid(Action::Create))?;

        let body = arg(dto).map_err(self.fail(Action::Create))?;
        self.ipc
            .call(Channel::AppointmentCreate, vec![body])
            .await
            .map_err(self.fail(Action::Create))
    }

    async fn update(&self, id: &str, dto: &UpdateAppointmentDto) -> RepoResult<Appointment> {
        dto.validate().map_err(self.invalid(Action::Update))?;

        let body = arg(dto).map_err(self.fail(Action::Update))?;
        self.ipc
            .call(Channel::AppointmentUpdate, vec![id.into(), body])
            .await
            .map_err(self.fail(Action::Update))
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        self.ipc
            .call_unit(Channel::AppointmentDelete, vec![id.into()])
            .await
            .map_err(self.fail(Action::Delete))
    }
}
