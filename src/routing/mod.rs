//! Route-resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Table Compilation (at startup):
//!     ActionDescriptor[]
//!     → Router::build (validate paths, reject duplicates)
//!     → Partition: exact map + prefix list sorted by length
//!     → Freeze as immutable Router
//!
//! Incoming Request (path):
//!     → Router::resolve (exact lookup, then longest-prefix scan)
//!     → Return: ResolvedRoute or None
//! ```
//!
//! # Design Decisions
//! - Table built once, immutable at runtime (lock-free reads)
//! - A duplicate path is a startup error, never a silent override
//! - No regex in hot path (exact map + literal prefix scan)
//! - Deterministic: same path always resolves to the same descriptor
//! - Resolution never instantiates handlers; factories are handed back verbatim

pub mod action;
pub mod error;
pub mod router;

pub use action::{ActionDescriptor, HandlerFactory};
pub use error::BuildError;
pub use router::{ResolvedRoute, Router};
