//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Validate → Build dispatch table → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM / ctrl-c → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error (config, dispatch table) is fatal
//! - The listener starts last, only once the table is built

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
