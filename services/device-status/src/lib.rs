//! Device Status - IoT device status dashboard
//!
//! Serves a device list and per-device detail pages backed by an in-memory
//! store, a simulated device API, and a "last updated" clock.

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod io;
pub mod pages;
pub mod reports;
pub mod source;
pub mod state;

pub use config::{load_config, Config};
pub use error::{DeviceStatusError, Result};

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use device_model::DeviceStore;
use tokio_util::sync::CancellationToken;

use crate::clock::ClockTicker;
use crate::dashboard::DashboardState;

/// Run the device status service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    config.validate()?;
    let cancel = CancellationToken::new();

    let store = state::new_store_handle(DeviceStore::new(config.initial_devices())?);
    let source = source::build_source(&config.source, Arc::clone(&store))?;
    let clock = ClockTicker::spawn(
        Duration::from_millis(config.clock.tick_interval_ms),
        &cancel,
    );

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Shutdown signal received"),
            Err(e) => tracing::error!("Failed to listen for ctrl-c: {}", e),
        }
        cancel_for_signal.cancel();
    });

    let dashboard = DashboardState::new(store, source, clock.subscribe(), cancel.clone());
    let router = dashboard::build_router(dashboard);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        DeviceStatusError::Config(format!(
            "Failed to bind dashboard to port {}: {}",
            config.server.port, e
        ))
    })?;
    tracing::info!("Dashboard listening on http://{}", addr);

    let cancel_for_server = cancel.clone();
    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel_for_server.cancelled().await;
        })
        .await?;

    clock.stop().await;
    tracing::info!("Device status service stopped");

    Ok(())
}
