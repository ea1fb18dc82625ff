//! # IPC Host Handlers
//!
//! Registers one handler per channel on a [`ChannelRouter`]. The router is
//! what the shell installs into [`HostContext`](salon_data::HostContext)
//! when it runs as a desktop host.
//!
//! ## Argument Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer:getAll                  []                                   │
//! │  customer:getById                 [id]                                 │
//! │  customer:create                  [dto]                                │
//! │  customer:update                  [id, dto]                            │
//! │  customer:delete                  [id]                                 │
//! │  appointment:getAllByCustomerId   [customerId]                         │
//! │  appointment:*                    same shape as customer:*             │
//! │  staff:getAll / service:getAll    []                                   │
//! │                                                                         │
//! │  CoreError::NotFound   → BridgeError::NotFound                         │
//! │  CoreError::Validation → BridgeError::InvalidArguments                 │
//! │  anything else         → BridgeError::Rejected                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::future::Future;

use serde::Serialize;
use serde_json::Value;

use salon_core::{
    CoreError, CreateAppointmentDto, CreateCustomerDto, UpdateAppointmentDto, UpdateCustomerDto,
};
use salon_data::bridge::{decode_arg, encode_reply};
use salon_data::{BridgeError, Channel, ChannelRouter};

use crate::backend::SalonBackend;

/// Builds the host-side router for every channel.
pub fn router(backend: SalonBackend) -> ChannelRouter {
    let mut router = ChannelRouter::new();

    // Customers
    on(&mut router, &backend, Channel::CustomerGetAll, |b, _| async move {
        Ok::<_, BridgeError>(b.customers().await)
    });
    on(&mut router, &backend, Channel::CustomerGetById, |b, args| async move {
        let id: i64 = decode_arg(&args, 0)?;
        b.customer(id).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::CustomerCreate, |b, args| async move {
        let dto: CreateCustomerDto = decode_arg(&args, 0)?;
        b.create_customer(&dto).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::CustomerUpdate, |b, args| async move {
        let id: i64 = decode_arg(&args, 0)?;
        let dto: UpdateCustomerDto = decode_arg(&args, 1)?;
        b.update_customer(id, &dto).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::CustomerDelete, |b, args| async move {
        let id: i64 = decode_arg(&args, 0)?;
        b.delete_customer(id).await.map_err(reject)
    });

    // Appointments
    on(&mut router, &backend, Channel::AppointmentGetAll, |b, _| async move {
        Ok::<_, BridgeError>(b.appointments(None).await)
    });
    on(
        &mut router,
        &backend,
        Channel::AppointmentGetAllByCustomerId,
        |b, args| async move {
            let customer_id: String = decode_arg(&args, 0)?;
            Ok::<_, BridgeError>(b.appointments(Some(&customer_id)).await)
        },
    );
    on(&mut router, &backend, Channel::AppointmentGetById, |b, args| async move {
        let id: String = decode_arg(&args, 0)?;
        b.appointment(&id).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::AppointmentCreate, |b, args| async move {
        let dto: CreateAppointmentDto = decode_arg(&args, 0)?;
        b.create_appointment(&dto).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::AppointmentUpdate, |b, args| async move {
        let id: String = decode_arg(&args, 0)?;
        let dto: UpdateAppointmentDto = decode_arg(&args, 1)?;
        b.update_appointment(&id, &dto).await.map_err(reject)
    });
    on(&mut router, &backend, Channel::AppointmentDelete, |b, args| async move {
        let id: String = decode_arg(&args, 0)?;
        b.delete_appointment(&id).await.map_err(reject)
    });

    // Catalogs
    on(&mut router, &backend, Channel::StaffGetAll, |b, _| async move {
        Ok::<_, BridgeError>(b.staff().await)
    });
    on(&mut router, &backend, Channel::ServiceGetAll, |b, _| async move {
        Ok::<_, BridgeError>(b.services().await)
    });

    router
}

/// Registers a handler that gets its own backend handle and whose result is
/// encoded as the reply.
fn on<F, Fut, T>(router: &mut ChannelRouter, backend: &SalonBackend, channel: Channel, handler: F)
where
    F: Fn(SalonBackend, Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, BridgeError>> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let backend = backend.clone();
    router.register(channel, move |args| {
        let reply = handler(backend.clone(), args);
        async move { encode_reply(&reply.await?) }
    });
}

fn reject(err: CoreError) -> BridgeError {
    match err {
        CoreError::NotFound { .. } => BridgeError::NotFound(err.to_string()),
        CoreError::Validation(_) => BridgeError::InvalidArguments(err.to_string()),
        CoreError::UnknownCustomer(_) => BridgeError::Rejected(err.to_string()),
    }
}
