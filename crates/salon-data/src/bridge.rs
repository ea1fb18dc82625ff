//! # Host Bridge
//!
//! The request/response entry point a desktop host exposes to the client,
//! and a host-side router that implements it.
//!
//! ## Invocation Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bridge Invocation                                    │
//! │                                                                         │
//! │  Client (ipc adapters)                Host process                      │
//! │  ─────────────────────                ────────────                      │
//! │                                                                         │
//! │  bridge.invoke("customer:create", [dto])                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  ChannelRouter                                                  │   │
//! │  │  "customer:getAll"  ──► handler(args) ──► Ok(Value)             │   │
//! │  │  "customer:create"  ──► handler(args) ──► Ok(Value) / Err(..)   │   │
//! │  │  unknown channel    ──► Err(BridgeError::UnknownChannel)        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  One response per invocation (at most once), no retry.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

// =============================================================================
// Bridge Trait
// =============================================================================

/// Rejections a host can return for an invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// No handler is registered for the channel.
    #[error("No handler for channel {0}")]
    UnknownChannel(String),

    /// The handler could not decode its arguments.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The addressed entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The handler failed for any other reason.
    #[error("Rejected: {0}")]
    Rejected(String),
}

/// A host-provided request/response bridge.
///
/// Implemented by the host shell; the client only ever calls [`invoke`].
///
/// [`invoke`]: IpcBridge::invoke
#[async_trait]
pub trait IpcBridge: Send + Sync {
    /// Invokes `channel` with positional JSON arguments.
    async fn invoke(&self, channel: &str, args: Vec<Value>) -> Result<Value, BridgeError>;
}

// =============================================================================
// Channel Router
// =============================================================================

/// Future returned by a registered handler.
pub type HandlerFuture = BoxFuture<'static, Result<Value, BridgeError>>;

type Handler = Arc<dyn Fn(Vec<Value>) -> HandlerFuture + Send + Sync>;

/// Host-side [`IpcBridge`] that dispatches by channel name.
///
/// ## Usage
/// ```rust,ignore
/// let mut router = ChannelRouter::new();
/// router.register(Channel::StaffGetAll, move |_args| {
///     let backend = backend.clone();
///     async move { Ok(serde_json::to_value(backend.staff().await).unwrap_or_default()) }
/// });
///
/// let bridge: Arc<dyn IpcBridge> = Arc::new(router);
/// ```
#[derive(Clone, Default)]
pub struct ChannelRouter {
    handlers: HashMap<String, Handler>,
}

impl ChannelRouter {
    /// Creates an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the handler for a channel.
    pub fn register<C, F, Fut>(&mut self, channel: C, handler: F) -> &mut Self
    where
        C: AsRef<str>,
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Value, BridgeError>> + Send + 'static,
    {
        let name = channel.as_ref().to_string();
        debug!(channel = %name, "Registering IPC handler");
        self.handlers
            .insert(name, Arc::new(move |args| handler(args).boxed()));
        self
    }

    /// Returns true if a handler is registered for `channel`.
    pub fn handles(&self, channel: &str) -> bool {
        self.handlers.contains_key(channel)
    }

    /// Returns the registered channel names, sorted.
    pub fn channels(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ChannelRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelRouter")
            .field("channels", &self.channels())
            .finish()
    }
}

#[async_trait]
impl IpcBridge for ChannelRouter {
    async fn invoke(&self, channel: &str, args: Vec<Value>) -> Result<Value, BridgeError> {
        let handler = match self.handlers.get(channel) {
            Some(handler) => handler.clone(),
            None => {
                warn!(%channel, "Invocation on unknown channel");
                return Err(BridgeError::UnknownChannel(channel.to_string()));
            }
        };

        debug!(%channel, argc = args.len(), "Dispatching IPC invocation");
        handler(args).await
    }
}

// =============================================================================
// Handler Helpers
// =============================================================================

/// Decodes the positional argument at `index`.
///
/// Used by host handlers; a missing or mistyped argument is an
/// [`BridgeError::InvalidArguments`].
pub fn decode_arg<T: DeserializeOwned>(args: &[Value], index: usize) -> Result<T, BridgeError> {
    let value = args
        .get(index)
        .ok_or_else(|| BridgeError::InvalidArguments(format!("missing argument {}", index)))?;

    serde_json::from_value(value.clone())
        .map_err(|e| BridgeError::InvalidArguments(format!("argument {}: {}", index, e)))
}

/// Encodes a handler result.
pub fn encode_reply<T: serde::Serialize>(value: &T) -> Result<Value, BridgeError> {
    serde_json::to_value(value).map_err(|e| BridgeError::Rejected(e.to_string()))
}
