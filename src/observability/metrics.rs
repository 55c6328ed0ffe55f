//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Expose a Prometheus-compatible metrics endpoint
//! - Track dispatch outcomes per route, method, and status
//!
//! # Metrics
//! - `registry_requests_total` (counter): dispatched requests by route,
//!   method, status; unmatched requests use route "none"
//! - `registry_request_duration_seconds` (histogram): dispatch latency
//!
//! # Design Decisions
//! - Metric updates are atomic increments; no locks on the request path
//! - A failed exporter install is logged, not fatal: the dispatcher can
//!   serve without metrics

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(error) => tracing::error!(error = %error, "Failed to install metrics exporter"),
    }
}

/// Record one dispatch outcome.
pub fn record_dispatch(method: &str, status: u16, route: &str, start_time: Instant) {
    counter!(
        "registry_requests_total",
        "method" => method.to_string(),
        "status" => status.to_string(),
        "route" => route.to_string()
    )
    .increment(1);

    histogram!(
        "registry_request_duration_seconds",
        "route" => route.to_string()
    )
    .record(start_time.elapsed().as_secs_f64());
}
