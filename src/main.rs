//! Registry request dispatcher.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌────────────────────────────────────────────┐
//!                      │              REQUEST DISPATCHER             │
//!                      │                                             │
//!     Client Request   │  ┌─────────┐    ┌──────────────┐           │
//!     ─────────────────┼─▶│  http   │───▶│   routing    │           │
//!                      │  │ server  │    │   engine     │           │
//!                      │  └─────────┘    └──────┬───────┘           │
//!                      │                        │ resolved route     │
//!                      │                        ▼                    │
//!                      │                 ┌──────────────┐           │
//!     Client Response  │                 │   action     │           │
//!     ◀────────────────┼─────────────────│   handler    │           │
//!                      │                 │ (per request)│           │
//!                      │                 └──────────────┘           │
//!                      │                                             │
//!                      │  ┌───────────────────────────────────────┐ │
//!                      │  │        Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌───────────┐ ┌─────────┐ │ │
//!                      │  │  │ config │ │ observa-  │ │lifecycle│ │ │
//!                      │  │  │        │ │ bility    │ │shutdown │ │ │
//!                      │  │  └────────┘ └───────────┘ └─────────┘ │ │
//!                      │  └───────────────────────────────────────┘ │
//!                      └────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use registry_router::actions;
use registry_router::config::{load_config, ServerConfig};
use registry_router::http::HttpServer;
use registry_router::lifecycle::Shutdown;
use registry_router::observability::{logging, metrics};
use registry_router::routing::Router;

/// HTTP request dispatcher for registry server actions.
#[derive(Debug, Parser)]
#[command(name = "registry-router", version)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    // An ambiguous or malformed action set must abort startup, not serve.
    let router = Router::build(actions::builtin_actions())?;
    tracing::info!(routes = router.len(), "Dispatch table built");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, router);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
