//! Device Status CLI
//!
//! Command-line interface for the IoT device status dashboard.

use std::path::PathBuf;

use clap::Parser;
use device_status::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "device-status")]
#[command(about = "IoT device status dashboard")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::debug!(
        "Parsed command line arguments: config={:?}, port={:?}, log_level={:?}",
        args.config,
        args.port,
        args.log_level
    );

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(port) = args.port {
        config.server.port = port;
    }

    tracing::info!("Starting device status service");
    tracing::debug!(
        "Devices: {}, Source: {}, Tick: {}ms",
        config.initial_devices().len(),
        config.source.type_name(),
        config.clock.tick_interval_ms
    );

    device_status::run(config).await?;

    Ok(())
}
