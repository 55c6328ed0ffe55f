//! HTTP front end for the dispatch core.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all dispatch handler)
//!     → request.rs (add request ID, build ActionRequest)
//!     → routing layer resolves the path
//!     → matched: factory() → handler.handle(request)
//!     → unmatched: 404 Not Found
//!     → response.rs (ActionResponse → HTTP response)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{ActionRequest, RequestIdLayer, X_REQUEST_ID};
pub use response::ActionResponse;
pub use server::HttpServer;
