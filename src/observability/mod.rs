//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (dispatch counters, latency histogram)
//!
//! Consumers:
//!     → Log aggregation (stdout, JSON or pretty)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; the request ID flows through every event
//! - Metric updates are cheap (atomic increments)
//! - The metrics exporter is optional and bound to its own address

pub mod logging;
pub mod metrics;
