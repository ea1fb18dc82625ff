//! # Validation Module
//!
//! Structural validation for DTOs before they leave the client.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form input (UI)                                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Adapter boundary (Rust)                                      │
//! │  └── THIS MODULE: DTO.validate() before HTTP POST / IPC invoke         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Backend / host process                                       │
//! │  └── Validates again, assigns ids and timestamps                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use salon_core::validation::{validate_name, validate_phone};
//!
//! assert!(validate_name("name", "Kim").is_ok());
//! assert!(validate_phone("010-1234-5678").is_ok());
//! assert!(validate_phone("call me").is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_APPOINTMENT_MINUTES, MAX_MEMO_LEN, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display name (customer, staff).
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most [`MAX_NAME_LEN`] characters
pub fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - 8 to 20 characters
/// - Digits, hyphens, spaces and a leading `+` only
///
/// ## Example
/// ```rust
/// use salon_core::validation::validate_phone;
///
/// assert!(validate_phone("+82 10-1234-5678").is_ok());
/// assert!(validate_phone("1234").is_err());
/// ```
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();
    let len = phone.chars().count();

    if len < 8 {
        return Err(ValidationError::TooShort {
            field: "phone".to_string(),
            min: 8,
        });
    }

    if len > 20 {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: 20,
        });
    }

    let valid = phone.chars().enumerate().all(|(i, c)| {
        c.is_ascii_digit() || c == '-' || c == ' ' || (c == '+' && i == 0)
    });

    if !valid {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, hyphens and a leading +".to_string(),
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// Structural check only: exactly one `@` with something on both sides and a
/// dot in the domain.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid("missing @"))?;

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid("expected name@domain"));
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid("domain must contain a dot"));
    }

    Ok(())
}

/// Validates a free-form memo.
pub fn validate_memo(memo: &str) -> ValidationResult<()> {
    if memo.chars().count() > MAX_MEMO_LEN {
        return Err(ValidationError::TooLong {
            field: "memo".to_string(),
            max: MAX_MEMO_LEN,
        });
    }
    Ok(())
}

/// Validates a foreign-key style reference that must be present.
pub fn validate_reference(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an appointment duration in minutes.
///
/// ## Rules
/// - Between 1 and [`MAX_APPOINTMENT_MINUTES`] inclusive
pub fn validate_duration(minutes: u32) -> ValidationResult<()> {
    if minutes == 0 || minutes > MAX_APPOINTMENT_MINUTES {
        return Err(ValidationError::OutOfRange {
            field: "durationMinutes".to_string(),
            min: 1,
            max: MAX_APPOINTMENT_MINUTES as i64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("name", "Kim").is_ok());
        assert!(validate_name("name", "김민지").is_ok());
        assert_eq!(
            validate_name("name", "   "),
            Err(ValidationError::Required {
                field: "name".to_string()
            })
        );
        assert!(validate_name("name", &"가".repeat(101)).is_err());
        // Counted in characters, not bytes
        assert!(validate_name("name", &"가".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("010-1234-5678").is_ok());
        assert!(validate_phone("+82 10 1234 5678").is_ok());
        assert!(validate_phone("0101234").is_err());
        assert!(validate_phone("010-1234-5678-0000-00").is_err());
        assert!(validate_phone("010+1234+5678").is_err());
        assert!(validate_phone("010-abcd-5678").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("kim@salon.kr").is_ok());
        assert!(validate_email("kim.salon.kr").is_err());
        assert!(validate_email("@salon.kr").is_err());
        assert!(validate_email("kim@").is_err());
        assert!(validate_email("kim@salon").is_err());
        assert!(validate_email("kim@@salon.kr").is_err());
    }

    #[test]
    fn test_validate_duration() {
        assert!(validate_duration(60).is_ok());
        assert!(validate_duration(480).is_ok());
        assert!(validate_duration(0).is_err());
        assert!(validate_duration(481).is_err());
    }

    #[test]
    fn test_validate_reference_and_memo() {
        assert!(validate_reference("customerId", "1").is_ok());
        assert!(validate_reference("customerId", " ").is_err());
        assert!(validate_memo("자주 오시는 손님").is_ok());
        assert!(validate_memo(&"x".repeat(501)).is_err());
    }
}
