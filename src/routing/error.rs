//! Build-time routing errors.
//!
//! Resolution itself never fails; a missing route is an ordinary `None`.
//! Everything here is fatal to startup: the server must not accept traffic
//! with an ambiguous or malformed dispatch table.

use thiserror::Error;

/// Errors detected while building the dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Two descriptors registered the identical path string, regardless of
    /// their matching modes.
    #[error("duplicate route registered at {path}")]
    DuplicateRoute {
        /// The path both descriptors claimed.
        path: String,
    },

    /// A descriptor was registered with an empty path.
    #[error("route path must not be empty")]
    EmptyPath,

    /// A descriptor path did not begin with `/`.
    #[error("route path {path:?} must begin with '/'")]
    MissingLeadingSlash {
        /// The offending path.
        path: String,
    },
}
