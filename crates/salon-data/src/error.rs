//! # Data Layer Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  reqwest::Error / non-2xx / bad JSON / BridgeError                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  TransportError (this module) ← stays inside the adapter               │
//! │       │                                                                 │
//! │       │  tracing::error!(raw error)                                    │
//! │       ▼                                                                 │
//! │  RepositoryError { code, message } ← localized, crosses the boundary   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store.error (UI renders it)                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use salon_core::ValidationError;

use crate::bridge::BridgeError;
use crate::messages::{
    failure_message, not_found_message, validation_message, Action, EntityKind, Locale,
};

// =============================================================================
// Transport Error
// =============================================================================

/// Failures of the underlying transport.
///
/// Adapters catch these at their boundary; they are never returned from a
/// repository method.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The request never produced a response (DNS, refused, reset).
    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    /// The response body was not the expected JSON shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The request payload could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(String),

    /// The host bridge rejected an invocation.
    #[error("Channel {channel} failed: {source}")]
    Ipc {
        channel: &'static str,
        #[source]
        source: BridgeError,
    },

    /// The configured endpoint cannot be used as a base URL.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl TransportError {
    /// Returns true if the failure means "the entity does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TransportError::Status { status: 404, .. }
                | TransportError::Ipc {
                    source: BridgeError::NotFound(_),
                    ..
                }
        )
    }
}

impl From<url::ParseError> for TransportError {
    fn from(err: url::ParseError) -> Self {
        TransportError::InvalidEndpoint(err.to_string())
    }
}

// =============================================================================
// Repository Error
// =============================================================================

/// Machine-readable category of a repository failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    LoadFailed,
    CreateFailed,
    UpdateFailed,
    DeleteFailed,
    /// The target entity does not exist (404 / host said so).
    NotFound,
    /// The DTO failed structural validation; nothing was sent.
    Validation,
}

impl From<Action> for ErrorCode {
    fn from(action: Action) -> Self {
        match action {
            Action::Load | Action::Get => ErrorCode::LoadFailed,
            Action::Create => ErrorCode::CreateFailed,
            Action::Update => ErrorCode::UpdateFailed,
            Action::Delete => ErrorCode::DeleteFailed,
        }
    }
}

/// The only error type that crosses the repository boundary.
///
/// `message` is localized and safe to show to the user as-is:
/// ```json
/// { "code": "CREATE_FAILED", "message": "고객 생성에 실패했습니다." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct RepositoryError {
    pub code: ErrorCode,
    pub message: String,
}

impl RepositoryError {
    /// Creates a repository error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        RepositoryError {
            code,
            message: message.into(),
        }
    }

    /// Maps a transport failure to its localized form, logging the original.
    pub fn from_transport(
        locale: Locale,
        entity: EntityKind,
        action: Action,
        err: TransportError,
    ) -> Self {
        error!(%entity, %action, error = %err, "Repository call failed");

        if err.is_not_found() && action != Action::Load {
            return RepositoryError::new(ErrorCode::NotFound, not_found_message(locale, entity));
        }

        RepositoryError::new(action.into(), failure_message(locale, entity, action))
    }

    /// Maps a DTO validation failure. The broken rule is appended, in the
    /// same locale, so the user can fix the form.
    pub fn from_validation(
        locale: Locale,
        entity: EntityKind,
        action: Action,
        err: ValidationError,
    ) -> Self {
        warn!(%entity, %action, error = %err, "Rejected invalid input before sending");
        RepositoryError::new(
            ErrorCode::Validation,
            format!(
                "{} {}",
                failure_message(locale, entity, action),
                validation_message(locale, &err)
            ),
        )
    }
}

// =============================================================================
// Config Error
// =============================================================================

/// Client configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Write(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("No config path available")]
    NoPath,
}

pub type ConfigResult<T> = Result<T, ConfigError>;
