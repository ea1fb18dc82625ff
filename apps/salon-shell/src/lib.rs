//! # Salon Shell Library
//!
//! Host application for the salon client. In its default mode it plays a
//! desktop host: it installs an in-process bridge, boots the stores over
//! IPC and loads every store. It can also boot the same stores against a
//! REST backend, or be that REST backend.
//!
//! ## Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          salon-shell                                    │
//! │                                                                         │
//! │  salon-shell                 desktop: seed → host::router → bridge     │
//! │                                       → StoreProvider (IPC)            │
//! │                                                                         │
//! │  salon-shell --web <url>     web: no bridge → StoreProvider (HTTP)     │
//! │                                                                         │
//! │  salon-shell serve [--port N]                                           │
//! │                              REST dev server on 0.0.0.0:N (3000)       │
//! │                              until Ctrl+C / SIGTERM                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (`RUST_LOG`, default `info,salon=debug`)
//! 2. Load `ClientConfig` (file, then `SALON_*` overrides)
//! 3. Run the selected mode

pub mod backend;
pub mod cli;
pub mod error;
pub mod host;
pub mod seed;
pub mod server;

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use salon_data::{ClientConfig, HostContext, TransportKind};
use salon_store::StoreProvider;

use crate::backend::SalonBackend;
use crate::cli::{Cli, Mode};

// =============================================================================
// Entry Point
// =============================================================================

/// Runs the shell for parsed command-line arguments.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    init_tracing();

    let mode = cli.mode();
    let config = ClientConfig::load_or_default(None);
    info!(?mode, base_url = %config.api.base_url, locale = %config.locale(), "Starting salon shell");

    match mode {
        Mode::Desktop => {
            let backend = SalonBackend::new();
            seed::populate(&backend).await?;

            let host = HostContext::with_bridge(Arc::new(host::router(backend)));
            let summary = boot_and_load(&host, &config).await?;
            println!("{}", summary);
        }
        Mode::Web { base_url } => {
            let mut config = config;
            config.api.base_url = base_url;
            config.validate()?;

            let summary = boot_and_load(&HostContext::new(), &config).await?;
            println!("{}", summary);
        }
        Mode::Serve { port } => {
            let backend = SalonBackend::new();
            seed::populate(&backend).await?;
            serve(backend, SocketAddr::from(([0, 0, 0, 0], port))).await?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=salon_data=trace` - Show adapter traffic only
/// - Default: INFO, DEBUG for the salon crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,salon=debug"));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

// =============================================================================
// Boot
// =============================================================================

/// What the stores hold after the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub transport: TransportKind,
    pub customers: usize,
    pub appointments: usize,
    pub staff: usize,
    pub active_staff: usize,
    pub services: usize,
    /// Store errors, already localized.
    pub errors: Vec<String>,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "transport:    {:?}", self.transport)?;
        writeln!(f, "customers:    {}", self.customers)?;
        writeln!(f, "appointments: {}", self.appointments)?;
        writeln!(f, "staff:        {} ({} active)", self.staff, self.active_staff)?;
        write!(f, "services:     {}", self.services)?;
        for error in &self.errors {
            write!(f, "\nerror:        {}", error)?;
        }
        Ok(())
    }
}

/// Boots the stores for `host` and fetches every collection once.
pub async fn boot_and_load(host: &HostContext, config: &ClientConfig) -> anyhow::Result<Summary> {
    let provider = StoreProvider::boot(host, config)?;
    info!(transport = ?provider.transport(), "Stores ready");

    let (customers, appointments, staff, services) = (
        provider.customers(),
        provider.appointments(),
        provider.staff(),
        provider.services(),
    );

    tokio::join!(
        customers.fetch_all(),
        appointments.fetch_all(),
        staff.fetch_all(),
        services.fetch_all(),
    );

    let errors: Vec<String> = [
        customers.snapshot().error,
        appointments.snapshot().error,
        staff.snapshot().error,
        services.snapshot().error,
    ]
    .into_iter()
    .flatten()
    .collect();

    for error in &errors {
        warn!(%error, "Store failed to load");
    }

    Ok(Summary {
        transport: provider.transport(),
        customers: customers.snapshot().items.len(),
        appointments: appointments.snapshot().items.len(),
        staff: staff.snapshot().items.len(),
        active_staff: staff.active().len(),
        services: services.snapshot().items.len(),
        errors,
    })
}

// =============================================================================
// Dev Server
// =============================================================================

/// Serves the REST routes until a shutdown signal arrives.
pub async fn serve(backend: SalonBackend, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "REST dev server listening");

    axum::serve(listener, server::router(backend))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
