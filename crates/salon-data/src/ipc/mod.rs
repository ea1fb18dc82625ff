//! # IPC Adapters
//!
//! Repository implementations over a host-installed [`IpcBridge`].
//!
//! ## Call Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  repo.update(id, dto)                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  bridge.invoke("customer:update", [id, dto])                            │
//! │       │                                                                 │
//! │       ├── Ok(Value)          → serde_json::from_value::<Customer>       │
//! │       │                          └── mismatch → TransportError::Decode  │
//! │       └── Err(BridgeError)   → TransportError::Ipc { channel, source }  │
//! │                                                                         │
//! │  Positional arguments: id first, then the DTO.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::bridge::IpcBridge;
use crate::channel::Channel;
use crate::error::TransportError;

mod appointment;
mod catalog;
mod customer;

pub use appointment::IpcAppointmentRepository;
pub use catalog::{IpcServiceRepository, IpcStaffRepository};
pub use customer::IpcCustomerRepository;

/// Typed calls over a shared bridge handle.
#[derive(Clone)]
pub struct IpcClient {
    bridge: Arc<dyn IpcBridge>,
}

impl IpcClient {
    pub fn new(bridge: Arc<dyn IpcBridge>) -> Self {
        IpcClient { bridge }
    }

    /// Invokes `channel` and decodes the reply as `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        channel: Channel,
        args: Vec<Value>,
    ) -> Result<T, TransportError> {
        let reply = self.send(channel, args).await?;
        serde_json::from_value(reply).map_err(|e| TransportError::Decode(e.to_string()))
    }

    /// Invokes `channel` and ignores the reply.
    pub async fn call_unit(&self, channel: Channel, args: Vec<Value>) -> Result<(), TransportError> {
        self.send(channel, args).await.map(|_| ())
    }

    async fn send(&self, channel: Channel, args: Vec<Value>) -> Result<Value, TransportError> {
        debug!(%channel, argc = args.len(), "IPC invoke");
        self.bridge
            .invoke(channel.as_str(), args)
            .await
            .map_err(|source| TransportError::Ipc {
                channel: channel.as_str(),
                source,
            })
    }
}

impl fmt::Debug for IpcClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IpcClient").finish_non_exhaustive()
    }
}

/// Encodes one positional argument.
pub(crate) fn arg<T: Serialize + ?Sized>(value: &T) -> Result<Value, TransportError> {
    serde_json::to_value(value).map_err(|e| TransportError::Encode(e.to_string()))
}
