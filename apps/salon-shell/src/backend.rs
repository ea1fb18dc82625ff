//! # In-Memory Backend
//!
//! The data the host serves. Both the IPC channel router and the REST dev
//! server sit on top of the same [`SalonBackend`].
//!
//! ## Ownership of Server Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field              Customer / Staff / Service    Appointment           │
//! │  ─────              ──────────────────────────    ───────────           │
//! │  id                 sequential i64                uuid v4 string        │
//! │  created_at         Utc::now() on create          Utc::now() on create  │
//! │  updated_at         Utc::now() on every write     Utc::now() on write   │
//! │  status             -                             Scheduled on create   │
//! │                                                                         │
//! │  Every write validates its DTO first; nothing is stored on failure.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use salon_core::error::CoreResult;
use salon_core::{
    Appointment, AppointmentStatus, CoreError, CreateAppointmentDto, CreateCustomerDto, Customer,
    Service, Staff, UpdateAppointmentDto, UpdateCustomerDto,
};

#[derive(Default)]
struct Tables {
    customers: Vec<Customer>,
    appointments: Vec<Appointment>,
    staff: Vec<Staff>,
    services: Vec<Service>,
    last_customer_id: i64,
    last_staff_id: i64,
    last_service_id: i64,
}

/// Shared handle to the host's tables. Clones see the same data.
#[derive(Clone, Default)]
pub struct SalonBackend {
    tables: Arc<RwLock<Tables>>,
}

impl SalonBackend {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Customers
    // =========================================================================

    pub async fn customers(&self) -> Vec<Customer> {
        self.tables.read().await.customers.clone()
    }

    pub async fn customer(&self, id: i64) -> CoreResult<Customer> {
        let tables = self.tables.read().await;
        tables
            .customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Customer", id))
    }

    pub async fn create_customer(&self, dto: &CreateCustomerDto) -> CoreResult<Customer> {
        dto.validate()?;

        let mut tables = self.tables.write().await;
        tables.last_customer_id += 1;

        let now = Utc::now();
        let mut customer = Customer::new(tables.last_customer_id, dto.name.trim());
        customer.phone = dto.phone.clone();
        customer.email = dto.email.clone();
        customer.memo = dto.memo.clone();
        customer.visit_count = Some(0);
        customer.created_at = Some(now);
        customer.updated_at = Some(now);

        info!(id = customer.id, "Customer created");
        tables.customers.push(customer.clone());
        Ok(customer)
    }

    pub async fn update_customer(&self, id: i64, dto: &UpdateCustomerDto) -> CoreResult<Customer> {
        dto.validate()?;

        let mut tables = self.tables.write().await;
        let customer = tables
            .customers
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::not_found("Customer", id))?;

        dto.apply_to(customer);
        customer.updated_at = Some(Utc::now());
        debug!(id, "Customer updated");
        Ok(customer.clone())
    }

    /// Deletes a customer together with their appointments.
    pub async fn delete_customer(&self, id: i64) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.customers.len();
        tables.customers.retain(|c| c.id != id);
        if tables.customers.len() == before {
            return Err(CoreError::not_found("Customer", id));
        }

        let key = id.to_string();
        tables.appointments.retain(|a| a.customer_id != key);
        info!(id, "Customer deleted");
        Ok(())
    }

    // =========================================================================
    // Appointments
    // =========================================================================

    /// All appointments, or only those of one customer.
    pub async fn appointments(&self, customer_id: Option<&str>) -> Vec<Appointment> {
        let tables = self.tables.read().await;
        tables
            .appointments
            .iter()
            .filter(|a| customer_id.map_or(true, |id| a.customer_id == id))
            .cloned()
            .collect()
    }

    pub async fn appointment(&self, id: &str) -> CoreResult<Appointment> {
        let tables = self.tables.read().await;
        tables
            .appointments
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Appointment", id))
    }

    /// Books an appointment.
    ///
    /// The customer must exist; staff and service references are checked
    /// when set. Without an explicit duration the service's duration is used.
    pub async fn create_appointment(&self, dto: &CreateAppointmentDto) -> CoreResult<Appointment> {
        dto.validate()?;

        let mut tables = self.tables.write().await;
        let known_customer = tables
            .customers
            .iter()
            .any(|c| c.id.to_string() == dto.customer_id);
        if !known_customer {
            return Err(CoreError::UnknownCustomer(dto.customer_id.clone()));
        }

        if let Some(staff_id) = dto.staff_id {
            if !tables.staff.iter().any(|s| s.id == staff_id) {
                return Err(CoreError::not_found("Staff", staff_id));
            }
        }

        let service = match dto.service_id {
            Some(service_id) => Some(
                tables
                    .services
                    .iter()
                    .find(|s| s.id == service_id)
                    .ok_or_else(|| CoreError::not_found("Service", service_id))?,
            ),
            None => None,
        };

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4().to_string(),
            customer_id: dto.customer_id.clone(),
            staff_id: dto.staff_id,
            service_id: dto.service_id,
            scheduled_at: dto.scheduled_at,
            duration_minutes: dto
                .duration_minutes
                .or_else(|| service.and_then(|s| s.duration_minutes)),
            status: AppointmentStatus::Scheduled,
            memo: dto.memo.clone(),
            created_at: Some(now),
            updated_at: Some(now),
        };

        info!(id = %appointment.id, customer_id = %appointment.customer_id, "Appointment booked");
        tables.appointments.push(appointment.clone());
        Ok(appointment)
    }

    pub async fn update_appointment(
        &self,
        id: &str,
        dto: &UpdateAppointmentDto,
    ) -> CoreResult<Appointment> {
        dto.validate()?;

        let mut tables = self.tables.write().await;
        let appointment = tables
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| CoreError::not_found("Appointment", id))?;

        dto.apply_to(appointment);
        appointment.updated_at = Some(Utc::now());
        debug!(id, status = %appointment.status, "Appointment updated");
        Ok(appointment.clone())
    }

    pub async fn delete_appointment(&self, id: &str) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        let before = tables.appointments.len();
        tables.appointments.retain(|a| a.id != id);
        if tables.appointments.len() == before {
            return Err(CoreError::not_found("Appointment", id));
        }
        Ok(())
    }

    // =========================================================================
    // Catalogs
    // =========================================================================

    pub async fn staff(&self) -> Vec<Staff> {
        self.tables.read().await.staff.clone()
    }

    pub async fn services(&self) -> Vec<Service> {
        self.tables.read().await.services.clone()
    }

    /// Adds a staff member. Catalogs are managed host-side only.
    pub async fn add_staff(&self, name: &str, role: Option<&str>) -> Staff {
        let mut tables = self.tables.write().await;
        tables.last_staff_id += 1;

        let staff = Staff {
            id: tables.last_staff_id,
            name: name.to_string(),
            role: role.map(str::to_string),
            phone: None,
            is_active: true,
        };
        tables.staff.push(staff.clone());
        staff
    }

    /// Marks a staff member as unable to take bookings.
    pub async fn deactivate_staff(&self, id: i64) -> CoreResult<()> {
        let mut tables = self.tables.write().await;
        let staff = tables
            .staff
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| CoreError::not_found("Staff", id))?;
        staff.is_active = false;
        Ok(())
    }

    pub async fn add_service(
        &self,
        name: &str,
        category: &str,
        duration_minutes: u32,
        price: i64,
    ) -> Service {
        let mut tables = self.tables.write().await;
        tables.last_service_id += 1;

        let service = Service {
            id: tables.last_service_id,
            name: name.to_string(),
            category: Some(category.to_string()),
            duration_minutes: Some(duration_minutes),
            price: Some(price),
        };
        tables.services.push(service.clone());
        service
    }
}
