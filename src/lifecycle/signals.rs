//! OS signal handling.
//!
//! # Responsibilities
//! - Translate ctrl-c and SIGTERM into a graceful-shutdown future
//!
//! # Design Decisions
//! - Uses Tokio's async-safe signal handling
//! - SIGTERM is honored on Unix so container orchestrators can drain us

/// Resolves when a shutdown signal is received.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutdown signal received");
}
