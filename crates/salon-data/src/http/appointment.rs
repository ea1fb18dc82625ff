//! # HTTP Appointment Repository

use async_trait::async_trait;

use salon_core::validation::validate_reference;
use salon_core::{Appointment, CreateAppointmentDto, UpdateAppointmentDto, ValidationError};

use super::HttpClient;
use crate::error::{RepositoryError, TransportError};
use crate::messages::{Action, EntityKind, Locale};
use crate::repository::{AppointmentRepository, RepoResult, TransportKind};

const APPOINTMENTS: &str = "api/appointments";

/// [`AppointmentRepository`] over `/api/appointments`.
///
/// Per-customer listing uses the `customerId` query parameter on the
/// collection route rather than a nested path.
#[derive(Debug, Clone)]
pub struct HttpAppointmentRepository {
    http: HttpClient,
    locale: Locale,
}

impl HttpAppointmentRepository {
    pub fn new(http: HttpClient, locale: Locale) -> Self {
        HttpAppointmentRepository { http, locale }
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
impl AppointmentRepository for HttpAppointmentRepository {
    fn transport(&self) -> TransportKind {
        TransportKind::Http
    }

    async fn get_all(&self) -> RepoResult<Vec<Appointment>> {
        let url = self
            .http
            .collection(APPOINTMENTS)
            .map_err(self.fail(Action::Load))?;
        self.http.get_json(url).await.map_err(self.fail(Action::Load))
    }

    async fn get_all_by_customer_id(&self, customer_id: &str) -> RepoResult<Vec<Appointment>> {
        validate_reference("customerId", customer_id)
            .map_err(self.invalid(Action::Load))?;

        let mut url = self
            .http
            .collection(APPOINTMENTS)
            .map_err(self.fail(Action::Load))?;
        url.query_pairs_mut().append_pair("customerId", customer_id);

        self.http.get_json(url).await.map_err(self.fail(Action::Load))
    }

    async fn get_by_id(&self, id: &str) -> RepoResult<Appointment> {
        let url = self
            .http
            .member(APPOINTMENTS, id)
            .map_err(self.fail(Action::Get))?;
        self.http.get_json(url).await.map_err(self.fail(Action::Get))
    }

    async fn create(&self, dto: &CreateAppointmentDto) -> RepoResult<Appointment> {
        dto.validate().map_err(self.invalid(Action::Create))?;

        let url = self
            .http
            .collection(APPOINTMENTS)
            .map_err(self.fail(Action::Create))?;
        self.http
            .post_json(url, dto)
            .await
            .map_err(self.fail(Action::Create))
    }

    async fn update(&self, id: &str, dto: &UpdateAppointmentDto) -> RepoResult<Appointment> {
        dto.validate().map_err(self.invalid(Action::Update))?;

        let url = self
            .http
            .member(APPOINTMENTS, id)
            .map_err(self.fail(Action::Update))?;
        self.http
            .put_json(url, dto)
            .await
            .map_err(self.fail(Action::Update))
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        let url = self
            .http
            .member(APPOINTMENTS, id)
            .map_err(self.fail(Action::Delete))?;
        self.http.delete(url).await.map_err(self.fail(Action::Delete))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::http::testing::{serve, unreachable};
    use axum::extract::{Path, Query};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use salon_core::AppointmentStatus;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn repo(base_url: &str) -> HttpAppointmentRepository {
        HttpAppointmentRepository::new(HttpClient::new(base_url).unwrap(), Locale::Ko)
    }

    fn backend() -> Router {
        Router::new()
            .route(
                "/api/appointments",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    let all = vec![
                        json!({"id": "a1", "customerId": "1"}),
                        json!({"id": "a2", "customerId": "2", "status": "completed"}),
                    ];
                    let filtered: Vec<Value> = match query.get("customerId") {
                        Some(id) => all
                            .into_iter()
                            .filter(|a| a["customerId"] == id.as_str())
                            .collect(),
                        None => all,
                    };
                    Json(Value::Array(filtered))
                })
                .post(|Json(body): Json<Value>| async move {
                    (
                        StatusCode::CREATED,
                        Json(json!({"id": "a3", "customerId": body["customerId"]})),
                    )
                }),
            )
            .route(
                "/api/appointments/{id}",
                get(|Path(id): Path<String>| async move {
                    if id == "a1" {
                        Ok(Json(json!({"id": "a1", "customerId": "1"})))
                    } else {
                        Err(StatusCode::NOT_FOUND)
                    }
                })
                .put(|Path(id): Path<String>, Json(body): Json<Value>| async move {
                    Json(json!({"id": id, "customerId": "1", "status": body["status"]}))
                })
                .delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
    }

    #[tokio::test]
    async fn test_get_all_by_customer_id_sends_query() {
        let repo = repo(&serve(backend()).await);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all.len(), 2);

        let for_two = repo.get_all_by_customer_id("2").await.unwrap();
        assert_eq!(for_two.len(), 1);
        assert_eq!(for_two[0].id, "a2");
        assert_eq!(for_two[0].status, AppointmentStatus::Completed);
    }

    #[tokio::test]
    async fn test_create_and_update() {
        let repo = repo(&serve(backend()).await);

        let created = repo.create(&CreateAppointmentDto::new("1")).await.unwrap();
        assert_eq!(created.id, "a3");
        assert_eq!(created.customer_id, "1");

        let updated = repo
            .update("a1", &UpdateAppointmentDto::status(AppointmentStatus::NoShow))
            .await
            .unwrap();
        assert_eq!(updated.status, AppointmentStatus::NoShow);
    }

    #[tokio::test]
    async fn test_missing_appointment_is_not_found() {
        let repo = repo(&serve(backend()).await);

        assert_eq!(repo.get_by_id("a1").await.unwrap().customer_id, "1");

        let err = repo.get_by_id("zz").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "예약 정보를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_delete_failure_is_localized() {
        let repo = repo(&serve(backend()).await);

        let err = repo.delete("a1").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DeleteFailed);
        assert_eq!(err.message, "예약 삭제에 실패했습니다.");
    }

    #[tokio::test]
    async fn test_blank_customer_id_is_rejected_locally() {
        let err = repo(unreachable())
            .get_all_by_customer_id("  ")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);

        let err = repo(unreachable())
            .update("a1", &UpdateAppointmentDto::default())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Validation);
    }
}
