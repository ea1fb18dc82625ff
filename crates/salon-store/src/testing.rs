//! In-memory repositories for store tests.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::oneshot;

use salon_core::{
    Appointment, CreateAppointmentDto, CreateCustomerDto, Customer, Service, Staff,
    UpdateAppointmentDto, UpdateCustomerDto,
};
use salon_data::messages::{failure_message, not_found_message};
use salon_data::{
    Action, AppointmentRepository, CustomerRepository, EntityKind, ErrorCode, Locale, RepoResult,
    RepositoryError, ServiceRepository, StaffRepository, TransportKind,
};

fn failed(entity: EntityKind, action: Action) -> RepositoryError {
    RepositoryError::new(action.into(), failure_message(Locale::Ko, entity, action))
}

fn missing(entity: EntityKind) -> RepositoryError {
    RepositoryError::new(ErrorCode::NotFound, not_found_message(Locale::Ko, entity))
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Default)]
struct CustomerTable {
    rows: Mutex<Vec<Customer>>,
    next_id: AtomicI64,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

/// Shared-handle fake: clones see the same table.
#[derive(Clone, Default)]
pub struct FakeCustomers {
    table: Arc<CustomerTable>,
}

impl FakeCustomers {
    pub fn with(rows: Vec<Customer>) -> Self {
        let next_id = rows.iter().map(|c| c.id).max().unwrap_or(0);
        let fake = FakeCustomers::default();
        fake.table.next_id.store(next_id, Ordering::SeqCst);
        *fake.table.rows.lock().unwrap() = rows;
        fake
    }

    pub fn fail_reads(&self, fail: bool) {
        self.table.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.table.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn last_assigned_id(&self) -> i64 {
        self.table.next_id.load(Ordering::SeqCst)
    }

    fn check_write(&self, action: Action) -> RepoResult<()> {
        if self.table.fail_writes.load(Ordering::SeqCst) {
            return Err(failed(EntityKind::Customer, action));
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for FakeCustomers {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Customer>> {
        if self.table.fail_reads.load(Ordering::SeqCst) {
            return Err(failed(EntityKind::Customer, Action::Load));
        }
        Ok(self.table.rows.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: i64) -> RepoResult<Customer> {
        let rows = self.table.rows.lock().unwrap();
        rows.iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| missing(EntityKind::Customer))
    }

    async fn create(&self, dto: &CreateCustomerDto) -> RepoResult<Customer> {
        self.check_write(Action::Create)?;
        let id = self.table.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let mut customer = Customer::new(id, dto.name.trim());
        customer.phone = dto.phone.clone();
        self.table.rows.lock().unwrap().push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, id: i64, dto: &UpdateCustomerDto) -> RepoResult<Customer> {
        self.check_write(Action::Update)?;
        let mut rows = self.table.rows.lock().unwrap();
        let customer = rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| missing(EntityKind::Customer))?;
        dto.apply_to(customer);
        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        self.check_write(Action::Delete)?;
        let mut rows = self.table.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(missing(EntityKind::Customer));
        }
        Ok(())
    }
}

// =============================================================================
// Appointments
// =============================================================================

/// Holds the next gated read until opened.
pub struct Gate(oneshot::Sender<()>);

impl Gate {
    pub fn open(self) {
        let _ = self.0.send(());
    }
}

#[derive(Default)]
struct AppointmentTable {
    rows: Mutex<Vec<Appointment>>,
    next_id: AtomicI64,
    fail_writes: AtomicBool,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

#[derive(Clone, Default)]
pub struct FakeAppointments {
    table: Arc<AppointmentTable>,
}

impl FakeAppointments {
    pub fn with(rows: Vec<Appointment>) -> Self {
        let fake = FakeAppointments::default();
        *fake.table.rows.lock().unwrap() = rows;
        fake
    }

    pub fn fail_writes(&self, fail: bool) {
        self.table.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Makes the next collection read wait until the returned gate opens.
    pub fn gate_next_read(&self) -> Gate {
        let (tx, rx) = oneshot::channel();
        *self.table.gate.lock().unwrap() = Some(rx);
        Gate(tx)
    }

    async fn wait_gate(&self) {
        let gate = self.table.gate.lock().unwrap().take();
        if let Some(rx) = gate {
            let _ = rx.await;
        }
    }

    fn rows_where(&self, keep: impl Fn(&Appointment) -> bool) -> Vec<Appointment> {
        let rows = self.table.rows.lock().unwrap();
        rows.iter().filter(|a| keep(a)).cloned().collect()
    }
}

#[async_trait]
impl AppointmentRepository for FakeAppointments {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Appointment>> {
        self.wait_gate().await;
        Ok(self.rows_where(|_| true))
    }

    async fn get_all_by_customer_id(&self, customer_id: &str) -> RepoResult<Vec<Appointment>> {
        self.wait_gate().await;
        Ok(self.rows_where(|a| a.customer_id == customer_id))
    }

    async fn get_by_id(&self, id: &str) -> RepoResult<Appointment> {
        self.rows_where(|a| a.id == id)
            .pop()
            .ok_or_else(|| missing(EntityKind::Appointment))
    }

    async fn create(&self, dto: &CreateAppointmentDto) -> RepoResult<Appointment> {
        if self.table.fail_writes.load(Ordering::SeqCst) {
            return Err(failed(EntityKind::Appointment, Action::Create));
        }
        let n = self.table.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let appt = Appointment::new(format!("new-{}", n), dto.customer_id.clone());
        self.table.rows.lock().unwrap().push(appt.clone());
        Ok(appt)
    }

    async fn update(&self, id: &str, dto: &UpdateAppointmentDto) -> RepoResult<Appointment> {
        let mut rows = self.table.rows.lock().unwrap();
        let appt = rows
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| missing(EntityKind::Appointment))?;
        dto.apply_to(appt);
        Ok(appt.clone())
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        self.table.rows.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }
}

// =============================================================================
// Catalogs
// =============================================================================

pub struct FakeStaff(Vec<Staff>);

impl FakeStaff {
    pub fn with(rows: Vec<Staff>) -> Self {
        FakeStaff(rows)
    }
}

#[async_trait]
impl StaffRepository for FakeStaff {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Staff>> {
        Ok(self.0.clone())
    }
}

pub struct FakeServices(Option<Vec<Service>>);

impl FakeServices {
    pub fn failing() -> Self {
        FakeServices(None)
    }
}

#[async_trait]
impl ServiceRepository for FakeServices {
    fn transport(&self) -> TransportKind {
        TransportKind::Ipc
    }

    async fn get_all(&self) -> RepoResult<Vec<Service>> {
        self.0
            .clone()
            .ok_or_else(|| failed(EntityKind::Service, Action::Load))
    }
}
