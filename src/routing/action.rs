//! Action descriptors.
//!
//! # Responsibilities
//! - Bind a URL path and matching mode to a handler factory
//! - Defer handler construction until a request actually selects the route
//!
//! # Design Decisions
//! - Generic over the handler type: an incompatible factory is a compile
//!   error, so malformed entries can never be admitted into a table
//! - The factory is a shared closure (`Arc<dyn Fn>`), safe to invoke
//!   concurrently from any number of in-flight requests
//! - Factories must not capture mutable shared state; each invocation must
//!   yield an isolated handler instance

use std::fmt;
use std::sync::Arc;

/// Deferred, zero-argument constructor for a per-request handler instance.
///
/// Invoked once per dispatched request, never at table-build time.
pub type HandlerFactory<H> = Arc<dyn Fn() -> H + Send + Sync>;

/// A declarative record binding a URL path to a handler factory.
///
/// Exact descriptors match only their own path. Prefix descriptors match
/// their own path and any path it is a literal string prefix of.
pub struct ActionDescriptor<H> {
    path: String,
    is_prefix: bool,
    factory: HandlerFactory<H>,
}

impl<H> ActionDescriptor<H> {
    /// Create a descriptor that matches only `path` itself.
    pub fn exact(
        path: impl Into<String>,
        factory: impl Fn() -> H + Send + Sync + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            is_prefix: false,
            factory: Arc::new(factory),
        }
    }

    /// Create a descriptor that matches `path` and every path it literally
    /// prefixes.
    pub fn prefix(
        path: impl Into<String>,
        factory: impl Fn() -> H + Send + Sync + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            is_prefix: true,
            factory: Arc::new(factory),
        }
    }

    /// The registered path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Whether this descriptor matches by literal string prefix.
    pub fn is_prefix(&self) -> bool {
        self.is_prefix
    }

    /// The handler factory, untouched since registration.
    pub fn handler_factory(&self) -> &HandlerFactory<H> {
        &self.factory
    }
}

// Manual impl: cloning shares the factory, so H itself need not be Clone.
impl<H> Clone for ActionDescriptor<H> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            is_prefix: self.is_prefix,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<H> fmt::Debug for ActionDescriptor<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("path", &self.path)
            .field("is_prefix", &self.is_prefix)
            .finish_non_exhaustive()
    }
}
