//! # HTTP Customer Repository

use async_trait::async_trait;

use salon_core::{CreateCustomerDto, Customer, UpdateCustomerDto};

use super::HttpClient;
use crate::error::{RepositoryError, TransportError};
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{CustomerRepository, RepoResult, TransportKind};

const CUSTOMERS: &str = "api/customers";

/// [`CustomerRepository`] over `/api/customers`.
#[derive(Debug, Clone)]
pub struct HttpCustomerRepository {
    http: HttpClient,
    locale: Locale,
}

impl HttpCustomerRepository {
    pub fn new(http: HttpClient, locale: Locale) -> Self {
        HttpCustomerRepository { http, locale }
    }

    fn fail(&self, action: Action) -> impl FnOnce(TransportError) -> RepositoryError {
        let locale = self.locale;
        move |err| RepositoryError::from_transport(locale, EntityKind::Customer, action, err)
    }
}

#[async_trait]
impl CustomerRepository for HttpCustomerRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Http
    }

    async fn get_all(&self) -> RepoResult<Vec<Customer>> {
        let url = self.http.collection(CUSTOMERS).map_err(self.fail(Action::Load))?;
        self.http.get_json(url).await.map_err(self.fail(Action::Load))
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Customer> {
        let url = self
            .http
            .member(CUSTOMERS, &id.to_string())
            .map_err(self.fail(Action::Get))?;
        self.http.get_json(url).await.map_err(self.fail(Action::Get))
    }

    async fn create(&self, dto: &CreateCustomerDto) -> RepoResult<Customer> {
        dto.validate().map_err(|e| {
            RepositoryError::from_validation(self.locale, EntityKind::Customer, Action::Create, e)
        })?;

        let url = self.http.collection(CUSTOMERS).map_err(self.fail(Action::Create))?;
        self.http
            .post_json(url, dto)
            .await
            .map_err(self.fail(Action::Create))
    }

    async fn update(&self, id: i64, dto: &UpdateCustomerDto) -> RepoResult<Customer> {
        dto.validate().map_err(|e| {
            RepositoryError::from_validation(self.locale, EntityKind::Customer, Action::Update, e)
        })?;

        let url = self
            .http
            .member(CUSTOMERS, &id.to_string())
            .map_err(self.fail(Action::Update))?;
        self.http
            .put_json(url, dto)
            .await
            .map_err(self.fail(Action::Update))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let url = self
            .http
            .member(CUSTOMERS, &id.to_string())
            .map_err(self.fail(Action::Delete))?;
        self.http.delete(url).await.map_err(self.fail(Action::Delete))
    }
}
