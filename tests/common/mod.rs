//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;

use registry_router::actions::BoxedHandler;
use registry_router::config::ServerConfig;
use registry_router::http::HttpServer;
use registry_router::lifecycle::Shutdown;
use registry_router::routing::{ActionDescriptor, Router};

/// Start a dispatcher on an ephemeral port with the given action set.
///
/// Returns the bound address and a shutdown handle that stops the server
/// when triggered (or when dropped at the end of the test).
pub async fn start_dispatcher(
    descriptors: Vec<ActionDescriptor<BoxedHandler>>,
) -> (SocketAddr, Shutdown) {
    let router = Router::build(descriptors).expect("dispatch table should build");
    let config = ServerConfig::default();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let receiver = shutdown.subscribe();
    let server = HttpServer::new(config, router);
    tokio::spawn(async move {
        let _ = server.run(listener, receiver).await;
    });

    // Give the acceptor a moment to come up.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (addr, shutdown)
}
