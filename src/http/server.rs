//! HTTP server setup and dispatch.
//!
//! # Responsibilities
//! - Create the Axum app with a catch-all dispatch handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Resolve each inbound path against the dispatch table
//! - Instantiate the matched handler once per request and run it
//! - Produce 404 for unmatched paths
//! - Record dispatch metrics and structured logs
//!
//! # Design Decisions
//! - The dispatch table is built before the server and shared immutably;
//!   no locking on the request path
//! - Handler construction is deferred to the moment a route is selected,
//!   so each request gets a fresh, isolated instance
//! - Only the URL path participates in matching; query strings are passed
//!   through to the handler untouched

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::actions::BoxedHandler;
use crate::config::ServerConfig;
use crate::http::request::{self, ActionRequest, RequestIdLayer, X_REQUEST_ID};
use crate::lifecycle::signals;
use crate::observability::metrics;
use crate::routing::Router as ActionRouter;

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    /// The immutable dispatch table.
    pub router: Arc<ActionRouter<BoxedHandler>>,

    /// Maximum request body size accepted before dispatch.
    pub max_body_bytes: usize,
}

/// HTTP server fronting the dispatch table.
pub struct HttpServer {
    app: axum::Router,
}

impl HttpServer {
    /// Create a server around an already-built dispatch table.
    pub fn new(config: ServerConfig, router: ActionRouter<BoxedHandler>) -> Self {
        let state = AppState {
            router: Arc::new(router),
            max_body_bytes: config.limits.max_body_bytes,
        };
        let app = Self::build_app(&config, state);
        Self { app }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &ServerConfig, state: AppState) -> axum::Router {
        axum::Router::new()
            .route("/{*path}", any(dispatch_handler))
            .route("/", any(dispatch_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until a shutdown signal or broadcast arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let graceful = async move {
            tokio::select! {
                _ = signals::shutdown_signal() => {}
                _ = shutdown.recv() => {}
            }
        };

        axum::serve(listener, self.app)
            .with_graceful_shutdown(graceful)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all dispatch handler.
///
/// Resolves the path, runs the matched action, and echoes the request ID
/// on every response, 404s included.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let request_id = request::request_id(request.headers());
    let mut response = dispatch(state, request, &request_id).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }
    response
}

async fn dispatch(state: AppState, request: Request<Body>, request_id: &str) -> Response {
    let start_time = Instant::now();
    let path = request.uri().path().to_string();
    let method = request.method().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Dispatching request"
    );

    // Resolve before touching the body; unmatched requests are cheap.
    let (descriptor_path, factory) = match state.router.resolve(&path) {
        Some(route) => (
            route.descriptor().path().to_string(),
            Arc::clone(route.handler_factory()),
        ),
        None => {
            tracing::warn!(request_id = %request_id, path = %path, "No action matched");
            metrics::record_dispatch(&method, 404, "none", start_time);
            return (StatusCode::NOT_FOUND, "Not Found").into_response();
        }
    };

    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(_) => {
            tracing::warn!(request_id = %request_id, path = %path, "Request body over limit");
            metrics::record_dispatch(&method, 413, &descriptor_path, start_time);
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    let action_request = ActionRequest {
        method: parts.method,
        path,
        query: parts.uri.query().map(str::to_owned),
        headers: parts.headers,
        request_id: request_id.to_string(),
        body: body_bytes,
    };

    // The factory is invoked exactly here: one fresh handler per request.
    let mut handler = factory();
    let action_response = handler.handle(action_request);
    let status = action_response.status().as_u16();

    metrics::record_dispatch(&method, status, &descriptor_path, start_time);
    tracing::debug!(
        request_id = %request_id,
        route = %descriptor_path,
        status = status,
        "Action completed"
    );

    action_response.into_response()
}
