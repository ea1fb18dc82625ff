//! # REST Dev Server
//!
//! Serves the backend over the routes the HTTP adapters call, so the web
//! build of the client can run against a local shell.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET    /api/customers                → 200 [Customer]                 │
//! │  POST   /api/customers                → 201 Customer | 400             │
//! │  GET    /api/customers/{id}           → 200 Customer | 404             │
//! │  PUT    /api/customers/{id}           → 200 Customer | 400 | 404       │
//! │  DELETE /api/customers/{id}           → 204 | 404                      │
//! │  GET    /api/appointments?customerId= → 200 [Appointment]              │
//! │  POST   /api/appointments             → 201 | 400 | 404 | 422          │
//! │  .../api/appointments/{id}            → same as customers              │
//! │  GET    /api/staff                    → 200 [Staff]                    │
//! │  GET    /api/services                 → 200 [Service]                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use salon_core::{
    Appointment, CreateAppointmentDto, CreateCustomerDto, Customer, Service, Staff,
    UpdateAppointmentDto, UpdateCustomerDto,
};

use crate::backend::SalonBackend;
use crate::error::ApiError;

type ApiResult<T> = Result<T, ApiError>;

/// Builds the REST router over `backend`.
pub fn router(backend: SalonBackend) -> Router {
    Router::new()
        .route("/api/customers", get(list_customers).post(create_customer))
        .route(
            "/api/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
        .route(
            "/api/appointments",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/api/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/api/staff", get(list_staff))
        .route("/api/services", get(list_services))
        .with_state(backend)
}

// =============================================================================
// Customers
// =============================================================================

async fn list_customers(State(backend): State<SalonBackend>) -> Json<Vec<Customer>> {
    Json(backend.customers().await)
}

async fn get_customer(
    State(backend): State<SalonBackend>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(backend.customer(id).await?))
}

async fn create_customer(
    State(backend): State<SalonBackend>,
    Json(dto): Json<CreateCustomerDto>,
) -> ApiResult<(StatusCode, Json<Customer>)> {
    let customer = backend.create_customer(&dto).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update_customer(
    State(backend): State<SalonBackend>,
    Path(id): Path<i64>,
    Json(dto): Json<UpdateCustomerDto>,
) -> ApiResult<Json<Customer>> {
    Ok(Json(backend.update_customer(id, &dto).await?))
}

async fn delete_customer(
    State(backend): State<SalonBackend>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    backend.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Appointments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppointmentFilter {
    customer_id: Option<String>,
}

async fn list_appointments(
    State(backend): State<SalonBackend>,
    Query(filter): Query<AppointmentFilter>,
) -> Json<Vec<Appointment>> {
    Json(backend.appointments(filter.customer_id.as_deref()).await)
}

async fn get_appointment(
    State(backend): State<SalonBackend>,
    Path(id): Path<String>,
) -> ApiResult<Json<Appointment>> {
    Ok(Json(backend.appointment(&id).await?))
}

async fn create_appointment(
    State(backend): State<SalonBackend>,
    Json(dto): Json<CreateAppointmentDto>,
) -> ApiResult<(StatusCode, Json<Appointment>)> {
    let appointment = backend.create_appointment(&dto).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

async fn update_appointment(
    State(backend): State<SalonBackend>,
    Path(id): Path<String>,
    Json(dto): Json<UpdateAppointmentDto>,
) -> ApiResult<Json<Appointment>> {
    Ok(Json(backend.update_appointment(&id, &dto).await?))
}

async fn delete_appointment(
    State(backend): State<SalonBackend>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    backend.delete_appointment(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Catalogs
// =============================================================================

async fn list_staff(State(backend): State<SalonBackend>) -> Json<Vec<Staff>> {
    Json(backend.staff().await)
}

async fn list_services(State(backend): State<SalonBackend>) -> Json<Vec<Service>> {
    Json(backend.services().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use salon_core::AppointmentStatus;
    use salon_data::http::{HttpAppointmentRepository, HttpClient, HttpCustomerRepository};
    use salon_data::{AppointmentRepository, CustomerRepository, ErrorCode, Locale};
    use tokio::net::TcpListener;

    async fn spawn(backend: SalonBackend) -> HttpClient {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(backend)).await.unwrap();
        });
        HttpClient::new(&format!("http://{}", addr)).unwrap()
    }

    #[tokio::test]
    async fn test_customer_routes_through_http_adapter() {
        let http = spawn(SalonBackend::new()).await;
        let repo = HttpCustomerRepository::new(http, Locale::Ko);

        let created = repo.create(&CreateCustomerDto::new("Kim")).await.unwrap();
        assert_eq!(created.id, 1);

        let all = repo.get_all().await.unwrap();
        assert_eq!(all, vec![created.clone()]);

        let update = UpdateCustomerDto {
            phone: Some("010-1111-2222".to_string()),
            ..Default::default()
        };
        let updated = repo.update(created.id, &update).await.unwrap();
        assert_eq!(updated.phone.as_deref(), Some("010-1111-2222"));

        repo.delete(created.id).await.unwrap();
        let err = repo.get_by_id(created.id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "고객 정보를 찾을 수 없습니다.");
    }

    #[tokio::test]
    async fn test_appointment_query_filter() {
        let backend = SalonBackend::new();
        for name in ["Kim", "Lee"] {
            backend
                .create_customer(&CreateCustomerDto::new(name))
                .await
                .unwrap();
        }
        for customer_id in ["1", "2", "2"] {
            backend
                .create_appointment(&CreateAppointmentDto::new(customer_id))
                .await
                .unwrap();
        }

        let repo = HttpAppointmentRepository::new(spawn(backend).await, Locale::Ko);
        assert_eq!(repo.get_all().await.unwrap().len(), 3);

        let lee = repo.get_all_by_customer_id("2").await.unwrap();
        assert_eq!(lee.len(), 2);
        assert!(lee.iter().all(|a| a.customer_id == "2"));

        let done = repo
            .update(&lee[0].id, &UpdateAppointmentDto::status(AppointmentStatus::Completed))
            .await
            .unwrap();
        assert_eq!(done.status, AppointmentStatus::Completed);
    }

    #[tokio::test]
    async fn test_rejected_booking_is_a_create_failure() {
        let repo = HttpAppointmentRepository::new(spawn(SalonBackend::new()).await, Locale::En);

        // 422 from the server: the customer does not exist.
        let err = repo
            .create(&CreateAppointmentDto::new("404"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CreateFailed);
        assert_eq!(err.message, "Failed to create appointment.");
    }
}
