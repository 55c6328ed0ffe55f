//! Server action set.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     builtin_actions() → ActionDescriptor[] → Router::build
//!
//! Per request:
//!     dispatch handler → factory() → ActionHandler::handle(ActionRequest)
//!     → ActionResponse
//! ```
//!
//! # Design Decisions
//! - The action set is a single explicit registration function, called once
//!   at startup; there is no runtime discovery
//! - Every handler instance is constructed fresh per request and dropped
//!   when the response is produced; nothing is shared between invocations

pub mod echo;
pub mod healthz;

use crate::http::request::ActionRequest;
use crate::http::response::ActionResponse;
use crate::routing::ActionDescriptor;

/// A server-side action, instantiated fresh for every dispatched request.
///
/// Implementations may keep per-request scratch state; they must not reach
/// for shared mutable state, since instances never outlive their request.
pub trait ActionHandler: Send {
    /// Run the action against one request.
    fn handle(&mut self, request: ActionRequest) -> ActionResponse;
}

/// Type-erased handler produced by descriptor factories.
pub type BoxedHandler = Box<dyn ActionHandler>;

/// The statically registered action set supplied to the router at startup.
pub fn builtin_actions() -> Vec<ActionDescriptor<BoxedHandler>> {
    vec![
        ActionDescriptor::exact("/healthz", || {
            Box::new(healthz::HealthzAction) as BoxedHandler
        }),
        ActionDescriptor::prefix("/echo", || Box::new(echo::EchoAction) as BoxedHandler),
    ]
}
