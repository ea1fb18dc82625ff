//! # Error Types
//!
//! Domain-specific error types for salon-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  salon-core errors (this file)                                         │
//! │  ├── CoreError        - Domain failures (unknown entity, bad input)    │
//! │  └── ValidationError  - DTO rule violations                            │
//! │                                                                         │
//! │  salon-data errors (separate crate)                                    │
//! │  ├── TransportError   - HTTP / IPC failures (never leaves adapters)    │
//! │  └── RepositoryError  - Localized, what stores see                     │
//! │                                                                         │
//! │  Flow: ValidationError → RepositoryError → Store.error → UI             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain failures raised by code that owns salon data (the host backend).
#[derive(Debug, Error)]
pub enum CoreError {
    /// No entity of this kind has the given id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An appointment references a customer that does not exist.
    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a NotFound error for an entity kind and id.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by `validate()` on DTOs before anything is sent over a transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., phone number, email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// An update DTO that would not change anything.
    #[error("nothing to update")]
    EmptyUpdate,
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::not_found("Customer", 42);
        assert_eq!(err.to_string(), "Customer not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "durationMinutes".to_string(),
            min: 1,
            max: 480,
        };
        assert_eq!(err.to_string(), "durationMinutes must be between 1 and 480");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyUpdate.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
