//! Product catalog facade (v1)
//!
//! A thin REST facade over an upstream product catalog, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │                   FACADE                      │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!   ───────────────────┼─▶│  http   │──▶│ products │──▶│ catalog  │───┼──▶ Upstream
//!                      │  │handlers │   │ service  │   │  client  │   │    products API
//!   Client Response    │  └─────────┘   └──────────┘   └──────────┘   │
//!   ◀──────────────────┼── envelope ◀── window/filter ◀── JSON ◀─────┼───
//!                      │                                              │
//!                      │  config · observability · lifecycle          │
//!                      └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use fake_store_facade::config::{load_config, FacadeConfig};
use fake_store_facade::lifecycle::{signals, Shutdown};
use fake_store_facade::observability::{logging, metrics};
use fake_store_facade::HttpServer;

#[derive(Parser)]
#[command(name = "fake-store-facade")]
#[command(about = "REST facade over an upstream product catalog", long_about = None)]
struct Args {
    /// Path to a TOML configuration file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => FacadeConfig::default(),
    };

    logging::init(&config.observability)?;

    tracing::info!("fake-store-facade v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        prefix = %config.api.prefix,
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::from_config(config)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.signal();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
