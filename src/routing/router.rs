//! Dispatch table construction and route lookup.
//!
//! # Responsibilities
//! - Compile the descriptor list into an immutable table, rejecting
//!   duplicates and malformed paths
//! - Resolve a request path to at most one descriptor
//! - Hand the matched handler factory back without invoking it
//!
//! # Design Decisions
//! - Exact matches win over prefix matches unconditionally
//! - Among prefix matches, the longest registered path wins
//! - Prefix matching is a literal string test with no segment awareness:
//!   `/prefix` matches `/prefixfoo` just as it matches `/prefix/foo`
//! - O(1) exact lookup via HashMap, O(n) prefix scan over a length-sorted
//!   list (acceptable for a fixed, startup-sized action set)

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::routing::action::{ActionDescriptor, HandlerFactory};
use crate::routing::error::BuildError;

/// Immutable dispatch table mapping request paths to action descriptors.
///
/// Built exactly once from the full descriptor set; any change to the set
/// requires building a fresh table. `resolve` is a pure read and may be
/// called concurrently without synchronization.
pub struct Router<H> {
    /// Exact-match descriptors, keyed by their registered path.
    exact: HashMap<String, ActionDescriptor<H>>,

    /// Prefix-match descriptors, sorted by path length descending so the
    /// first literal match found is the longest one.
    prefixes: Vec<ActionDescriptor<H>>,
}

impl<H> Router<H> {
    /// Compile a descriptor list into a dispatch table.
    ///
    /// Fails fast on the first duplicate path (regardless of matching
    /// modes) or malformed path. An empty list is valid and yields a table
    /// that resolves every path to `None`.
    pub fn build(
        descriptors: impl IntoIterator<Item = ActionDescriptor<H>>,
    ) -> Result<Self, BuildError> {
        let mut by_path: HashMap<String, ActionDescriptor<H>> = HashMap::new();

        for descriptor in descriptors {
            if descriptor.path().is_empty() {
                return Err(BuildError::EmptyPath);
            }
            if !descriptor.path().starts_with('/') {
                return Err(BuildError::MissingLeadingSlash {
                    path: descriptor.path().to_string(),
                });
            }
            match by_path.entry(descriptor.path().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(BuildError::DuplicateRoute {
                        path: entry.key().clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(descriptor);
                }
            }
        }

        let mut exact = HashMap::new();
        let mut prefixes = Vec::new();
        for (path, descriptor) in by_path {
            if descriptor.is_prefix() {
                prefixes.push(descriptor);
            } else {
                exact.insert(path, descriptor);
            }
        }

        // Length descending; lexicographic among equal lengths so iteration
        // order is deterministic. Two distinct equal-length paths can never
        // both prefix the same request, so the secondary key cannot change
        // which route wins.
        prefixes.sort_by(|a, b| {
            b.path()
                .len()
                .cmp(&a.path().len())
                .then_with(|| a.path().cmp(b.path()))
        });

        Ok(Self { exact, prefixes })
    }

    /// Resolve a request path to a route, if any descriptor matches.
    ///
    /// Only the path portion of the URL participates in matching; callers
    /// strip query strings and fragments. Never fails: a missing route is
    /// `None`, and the caller decides what that means (typically a 404).
    pub fn resolve(&self, request_path: &str) -> Option<ResolvedRoute<'_, H>> {
        if let Some(descriptor) = self.exact.get(request_path) {
            return Some(ResolvedRoute { descriptor });
        }
        self.prefixes
            .iter()
            .find(|descriptor| request_path.starts_with(descriptor.path()))
            .map(|descriptor| ResolvedRoute { descriptor })
    }

    /// Number of registered routes, across both matching modes.
    pub fn len(&self) -> usize {
        self.exact.len() + self.prefixes.len()
    }

    /// Whether the table has no routes at all.
    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.prefixes.is_empty()
    }
}

// Manual impl: descriptors print without their factories, so H itself need
// not be Debug.
impl<H> std::fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("exact", &self.exact)
            .field("prefixes", &self.prefixes)
            .finish()
    }
}

/// Outcome of a successful resolution.
///
/// Borrows the matched descriptor from the table. The handler factory is
/// exposed verbatim; invoking it is the caller's job, once per request.
pub struct ResolvedRoute<'a, H> {
    descriptor: &'a ActionDescriptor<H>,
}

impl<'a, H> ResolvedRoute<'a, H> {
    /// The descriptor that matched.
    pub fn descriptor(&self) -> &'a ActionDescriptor<H> {
        self.descriptor
    }

    /// The matched descriptor's handler factory, never invoked by the
    /// routing layer.
    pub fn handler_factory(&self) -> &'a HandlerFactory<H> {
        self.descriptor.handler_factory()
    }
}

impl<H> Clone for ResolvedRoute<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for ResolvedRoute<'_, H> {}
