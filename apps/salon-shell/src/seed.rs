//! Sample data so a fresh shell has something to show.

use chrono::{Duration, Utc};
use tracing::info;

use salon_core::error::CoreResult;
use salon_core::{CreateAppointmentDto, CreateCustomerDto};

use crate::backend::SalonBackend;

/// Fills an empty backend with a handful of customers, staff, services and
/// appointments.
pub async fn populate(backend: &SalonBackend) -> CoreResult<()> {
    let park = backend.add_staff("Park Jiwoo", Some("designer")).await;
    let choi = backend.add_staff("Choi Minseo", Some("nail artist")).await;
    let han = backend.add_staff("Han Yuna", Some("designer")).await;
    backend.deactivate_staff(han.id).await?;

    let cut = backend.add_service("Women's cut", "hair", 60, 35_000).await;
    let perm = backend.add_service("Digital perm", "hair", 150, 120_000).await;
    let gel = backend.add_service("Gel nails", "nail", 90, 55_000).await;

    let kim = backend
        .create_customer(
            &CreateCustomerDto::new("Kim Soyeon")
                .with_phone("010-1234-5678")
                .with_memo("Sensitive scalp"),
        )
        .await?;
    let lee = backend
        .create_customer(&CreateCustomerDto::new("Lee Hana").with_email("hana@example.com"))
        .await?;
    backend
        .create_customer(&CreateCustomerDto::new("Jung Mirae").with_phone("010-9876-5432"))
        .await?;

    let tomorrow = Utc::now() + Duration::days(1);
    let bookings = [
        (kim.id, park.id, cut.id, tomorrow),
        (kim.id, park.id, perm.id, tomorrow + Duration::days(14)),
        (lee.id, choi.id, gel.id, tomorrow + Duration::hours(3)),
    ];

    for (customer_id, staff_id, service_id, at) in bookings {
        let dto = CreateAppointmentDto {
            scheduled_at: Some(at),
            ..CreateAppointmentDto::new(customer_id.to_string())
                .with_staff(staff_id)
                .with_service(service_id)
        };
        backend.create_appointment(&dto).await?;
    }

    info!(
        customers = 3,
        staff = 3,
        services = 3,
        appointments = bookings.len(),
        "Seeded sample data"
    );
    Ok(())
}
