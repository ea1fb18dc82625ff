//! # Shell Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Errors leaving the host                              │
//! │                                                                         │
//! │  SalonBackend ── CoreError ──┬──► host::reject ──► BridgeError (IPC)   │
//! │                              │                                          │
//! │                              └──► ApiError ──► HTTP status + JSON body │
//! │                                   {"code": "NOT_FOUND", "message": ..} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use salon_core::CoreError;

// =============================================================================
// REST Error
// =============================================================================

/// Error body returned by the REST dev server.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorCode {
    /// 404
    NotFound,
    /// 400
    ValidationError,
    /// 422
    UnknownCustomer,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.code {
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ApiErrorCode::UnknownCustomer => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let code = match &err {
            CoreError::NotFound { .. } => ApiErrorCode::NotFound,
            CoreError::Validation(_) => ApiErrorCode::ValidationError,
            CoreError::UnknownCustomer(_) => ApiErrorCode::UnknownCustomer,
        };
        ApiError {
            code,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salon_core::ValidationError;

    #[test]
    fn test_core_errors_map_to_status() {
        let err = ApiError::from(CoreError::not_found("Customer", 7));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Customer not found: 7");

        let err = ApiError::from(CoreError::from(ValidationError::EmptyUpdate));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::from(CoreError::UnknownCustomer("9".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::from(CoreError::not_found("Appointment", "a1"));
        let body = serde_json::to_value(&err).unwrap();
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Appointment not found: a1");
    }
}
