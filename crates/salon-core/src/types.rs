//! # Domain Types
//!
//! Entities and DTOs shared by every layer of the salon client.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │   Appointment   │   │     Staff       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │◄──│  customer_id    │   │  id (i64)       │       │
//! │  │  name           │   │  id (String)    │──►│  name, role     │       │
//! │  │  phone, email   │   │  status         │   └─────────────────┘       │
//! │  │  visit_count    │   │  scheduled_at   │   ┌─────────────────┐       │
//! │  └─────────────────┘   │  service_id     │──►│    Service      │       │
//! │                        └─────────────────┘   │  id, price      │       │
//! │                                              └─────────────────┘       │
//! │                                                                         │
//! │  Create-DTOs carry no id, no timestamps and no derived statistics:     │
//! │  those are assigned by the backend.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! All types serialize with camelCase keys. Every descriptive field except
//! `name` / `customerId` is optional on the wire, so a minimal payload such as
//! `{"id":1,"name":"Kim"}` decodes into a [`Customer`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::validation::{
    validate_duration, validate_email, validate_memo, validate_name, validate_phone,
    validate_reference, ValidationResult,
};

// =============================================================================
// Entity Identity
// =============================================================================

/// An entity with a server-assigned, immutable identifier.
///
/// Stores use this to replace or drop entries after update/delete.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Identifier type (numeric or string depending on the entity).
    type Id: Clone + PartialEq + fmt::Display + Send + Sync + 'static;

    /// Returns the identifier.
    fn id(&self) -> &Self::Id;
}

// =============================================================================
// Customer
// =============================================================================

/// A salon customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    /// Server-assigned identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    /// Derived: number of completed visits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_count: Option<u32>,

    /// Derived: time of the most recent completed visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub last_visit_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Creates a customer with only the required fields set.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Customer {
            id,
            name: name.into(),
            phone: None,
            email: None,
            memo: None,
            visit_count: None,
            last_visit_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Customer {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

// =============================================================================
// Appointment
// =============================================================================

/// Lifecycle of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum AppointmentStatus {
    /// Booked, not yet happened.
    #[default]
    Scheduled,
    /// The customer came and the service was done.
    Completed,
    /// Cancelled ahead of time.
    Cancelled,
    /// The customer did not show up.
    NoShow,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::NoShow => write!(f, "noShow"),
        }
    }
}

/// A booked visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Appointment {
    /// Server-assigned identifier.
    pub id: String,

    /// The customer this appointment belongs to.
    pub customer_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub scheduled_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,

    #[serde(default)]
    pub status: AppointmentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Appointment {
    /// Creates a scheduled appointment with only the required fields set.
    pub fn new(id: impl Into<String>, customer_id: impl Into<String>) -> Self {
        Appointment {
            id: id.into(),
            customer_id: customer_id.into(),
            staff_id: None,
            service_id: None,
            scheduled_at: None,
            duration_minutes: None,
            status: AppointmentStatus::Scheduled,
            memo: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Entity for Appointment {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

// =============================================================================
// Staff & Service
// =============================================================================

/// A staff member (designer, stylist, receptionist).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Entity for Staff {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

/// An item on the salon's service menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Service {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    /// Price in KRW (no minor unit).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
}

impl Entity for Service {
    type Id = i64;

    fn id(&self) -> &i64 {
        &self.id
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Customer DTOs
// =============================================================================

/// Fields the client supplies to create a customer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateCustomerDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl CreateCustomerDto {
    /// Creates a DTO with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        CreateCustomerDto {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    /// Checks the DTO structurally. Required fields are never filled in.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name("name", &self.name)?;
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(memo) = &self.memo {
            validate_memo(memo)?;
        }
        Ok(())
    }
}

/// Partial edit of a customer. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateCustomerDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl UpdateCustomerDto {
    /// Returns true when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none() && self.memo.is_none()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        if let Some(name) = &self.name {
            validate_name("name", name)?;
        }
        if let Some(phone) = &self.phone {
            validate_phone(phone)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(memo) = &self.memo {
            validate_memo(memo)?;
        }
        Ok(())
    }

    /// Applies the set fields onto an existing customer.
    pub fn apply_to(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.trim().to_string();
        }
        if let Some(phone) = &self.phone {
            customer.phone = Some(phone.clone());
        }
        if let Some(email) = &self.email {
            customer.email = Some(email.clone());
        }
        if let Some(memo) = &self.memo {
            customer.memo = Some(memo.clone());
        }
    }
}

// =============================================================================
// Appointment DTOs
// =============================================================================

/// Fields the client supplies to book an appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CreateAppointmentDto {
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl CreateAppointmentDto {
    /// Creates a DTO for the given customer.
    pub fn new(customer_id: impl Into<String>) -> Self {
        CreateAppointmentDto {
            customer_id: customer_id.into(),
            ..Default::default()
        }
    }

    pub fn with_staff(mut self, staff_id: i64) -> Self {
        self.staff_id = Some(staff_id);
        self
    }

    pub fn with_service(mut self, service_id: i64) -> Self {
        self.service_id = Some(service_id);
        self
    }

    pub fn at(mut self, scheduled_at: DateTime<Utc>, duration_minutes: u32) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self.duration_minutes = Some(duration_minutes);
        self
    }

    pub fn validate(&self) -> ValidationResult<()> {
        validate_reference("customerId", &self.customer_id)?;
        if let Some(minutes) = self.duration_minutes {
            validate_duration(minutes)?;
        }
        if let Some(memo) = &self.memo {
            validate_memo(memo)?;
        }
        Ok(())
    }
}

/// Partial edit of an appointment. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UpdateAppointmentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl UpdateAppointmentDto {
    /// Shorthand for a status-only change.
    pub fn status(status: AppointmentStatus) -> Self {
        UpdateAppointmentDto {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.staff_id.is_none()
            && self.service_id.is_none()
            && self.scheduled_at.is_none()
            && self.duration_minutes.is_none()
            && self.status.is_none()
            && self.memo.is_none()
    }

    pub fn validate(&self) -> ValidationResult<()> {
        if self.is_empty() {
            return Err(ValidationError::EmptyUpdate);
        }
        if let Some(minutes) = self.duration_minutes {
            validate_duration(minutes)?;
        }
        if let Some(memo) = &self.memo {
            validate_memo(memo)?;
        }
        Ok(())
    }

    /// Applies the set fields onto an existing appointment.
    pub fn apply_to(&self, appointment: &mut Appointment) {
        if let Some(staff_id) = self.staff_id {
            appointment.staff_id = Some(staff_id);
        }
        if let Some(service_id) = self.service_id {
            appointment.service_id = Some(service_id);
        }
        if let Some(at) = self.scheduled_at {
            appointment.scheduled_at = Some(at);
        }
        if let Some(minutes) = self.duration_minutes {
            appointment.duration_minutes = Some(minutes);
        }
        if let Some(status) = self.status {
            appointment.status = status;
        }
        if let Some(memo) = &self.memo {
            appointment.memo = Some(memo.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_customer_decodes() {
        let customer: Customer = serde_json::from_value(json!({"id": 1, "name": "Kim"})).unwrap();
        assert_eq!(customer, Customer::new(1, "Kim"));
    }

    #[test]
    fn test_customer_wire_is_camel_case() {
        let mut customer = Customer::new(7, "Lee");
        customer.visit_count = Some(3);
        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "Lee", "visitCount": 3}));
    }

    #[test]
    fn test_minimal_appointment_decodes_as_scheduled() {
        let appt: Appointment =
            serde_json::from_value(json!({"id": "a1", "customerId": "1"})).unwrap();
        assert_eq!(appt, Appointment::new("a1", "1"));
        assert_eq!(appt.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(AppointmentStatus::NoShow).unwrap(),
            json!("noShow")
        );
        assert_eq!(AppointmentStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn test_staff_defaults_to_active() {
        let staff: Staff = serde_json::from_value(json!({"id": 2, "name": "Park"})).unwrap();
        assert!(staff.is_active);
    }

    #[test]
    fn test_create_dto_has_no_server_fields() {
        let dto = CreateCustomerDto::new("Lee");
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value, json!({"name": "Lee"}));
    }

    #[test]
    fn test_create_customer_validation() {
        assert!(CreateCustomerDto::new("Lee").validate().is_ok());
        assert!(CreateCustomerDto::new("").validate().is_err());
        assert!(CreateCustomerDto::new("Lee")
            .with_email("not-an-email")
            .validate()
            .is_err());
        assert!(CreateCustomerDto::new("Lee")
            .with_phone("010-1111-2222")
            .with_email("lee@salon.kr")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_update_customer_requires_a_change() {
        assert_eq!(
            UpdateCustomerDto::default().validate(),
            Err(ValidationError::EmptyUpdate)
        );

        let update = UpdateCustomerDto {
            memo: Some("VIP".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        let mut customer = Customer::new(1, "Kim");
        update.apply_to(&mut customer);
        assert_eq!(customer.memo.as_deref(), Some("VIP"));
        assert_eq!(customer.name, "Kim");
    }

    #[test]
    fn test_create_appointment_validation() {
        assert!(CreateAppointmentDto::new("1").validate().is_ok());
        assert!(CreateAppointmentDto::new("").validate().is_err());
        assert!(CreateAppointmentDto::new("1")
            .at(Utc::now(), 0)
            .validate()
            .is_err());
        assert!(CreateAppointmentDto::new("1")
            .with_staff(2)
            .with_service(3)
            .at(Utc::now(), 90)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_update_appointment_apply() {
        let mut appt = Appointment::new("a1", "1");
        let update = UpdateAppointmentDto::status(AppointmentStatus::Completed);
        assert!(update.validate().is_ok());
        update.apply_to(&mut appt);
        assert_eq!(appt.status, AppointmentStatus::Completed);
        assert_eq!(appt.customer_id, "1");
    }

    #[test]
    fn test_entity_ids() {
        assert_eq!(*Customer::new(5, "Kim").id(), 5);
        assert_eq!(Appointment::new("a9", "1").id(), "a9");
    }
}
