//! # IPC Customer Repository

use async_trait::async_trait;

use salon_core::{CreateCustomerDto, Customer, UpdateCustomerDto};

use super::{arg, IpcClient};
use crate::channel::Channel;
use crate::error::{RepositoryError, TransportError};
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{CustomerRepository, RepoResult, TransportKind};

/// [`CustomerRepository`] over the `customer:*` channels.
#[derive(Debug, Clone)]
pub struct IpcCustomerRepository {
    ipc: IpcClient,
    locale: Locale,
}

impl IpcCustomerRepository {
    pub fn new(ipc: IpcClient, locale: Locale) -> Self {
        IpcCustomerRepository { ipc, locale }
    }

    fn fail(&self, action: Action) -> impl FnOnce(TransportError) -> RepositoryError {
        let locale = self.locale;
        move |err| RepositoryError::from_transport(locale, EntityKind::Customer, action, err)
    }
}

#[async_trait]
impl CustomerRepository for IpcCustomerRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Customer>> {
        self.ipc
            .call(Channel::CustomerGetAll, vec![])
            .await
            .map_err(self.fail(Action::Load))
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Customer> {
        self.ipc
            .call(Channel::CustomerGetById, vec![id.into()])
            .await
            .map_err(self.fail(Action::Get))
    }

    async fn create(&self, dto: &CreateCustomerDto) -> RepoResult<Customer> {
        dto.validate().map_err(|e| {
            RepositoryError::from_validation(self.locale, EntityKind::Customer, Action::Create, e)
        })?;

        let body = arg(dto).map_err(self.fail(Action::Create))?;
        self.ipc
            .call(Channel::CustomerCreate, vec![body])
            .await
            .map_err(self.fail(Action::Create))
    }

    async fn update(&self, id: i64, dto: &UpdateCustomerDto) -> RepoResult<Customer> {
        dto.validate().map_err(|e| {
            RepositoryError::from_validation(self.locale, EntityKind::Customer, Action::Update, e)
        })?;

        let body = arg(dto).map_err(self.fail(Action::Update))?;
        self.ipc
            .call(Channel::CustomerUpdate, vec![id.into(), body])
            .await
            .map_err(self.fail(Action::Update))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.ipc
            .call_unit(Channel::CustomerDelete, vec![id.into()])
            .await
            .map_err(self.fail(Action::Delete))
    }
}
