//! HTTP staff and service catalogs.

use async_trait::async_trait;

use salon_core::{Service, Staff};

use super::HttpClient;
use crate::error::RepositoryError;
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{RepoResult, ServiceRepository, StaffRepository, TransportKind};

#[derive(Debug, Clone)]
pub struct HttpStaffRepository {
    http: HttpClient,
    locale: Locale,
}

impl HttpStaffRepository {
    pub fn new(http: HttpClient, locale: Locale) -> Self {
        HttpStaffRepository { http, locale }
    }
}

#[async_trait]
impl StaffRepository for HttpStaffRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Http
    }

    async fn get_all(&self) -> RepoResult<Vec<Staff>> {
        let locale = self.locale;
        let fail = |err| RepositoryError::from_transport(locale, EntityKind::Staff, Action::Load, err);

        let url = self.http.collection("api/staff").map_err(fail)?;
        self.http.get_json(url).await.map_err(fail)
    }
}

#[derive(Debug, Clone)]
pub struct HttpServiceRepository {
    http: HttpClient,
    locale: Locale,
}

impl HttpServiceRepository {
    pub fn new(http: HttpClient, locale: Locale) -> Self {
        HttpServiceRepository { http, locale }
    }
}

#[async_trait]
impl ServiceRepository for HttpServiceRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Http
    }

    async fn get_all(&self) -> RepoResult<Vec<Service>> {
        let locale = self.locale;
        let fail =
            |err| RepositoryError::from_transport(locale, EntityKind::Service, Action::Load, err);

        let url = self.http.collection("api/services").map_err(fail)?;
        self.http.get_json(url).await.map_err(fail)
    }
}
