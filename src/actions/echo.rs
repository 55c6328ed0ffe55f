//! Request-echo action, useful for smoke-testing the dispatch path.

use axum::http::StatusCode;
use serde_json::json;

use crate::actions::ActionHandler;
use crate::http::request::ActionRequest;
use crate::http::response::ActionResponse;

/// Prefix-match action under `/echo`; reflects the dispatched request.
pub struct EchoAction;

impl ActionHandler for EchoAction {
    fn handle(&mut self, request: ActionRequest) -> ActionResponse {
        let body = json!({
            "method": request.method.as_str(),
            "path": request.path,
            "query": request.query,
            "body_bytes": request.body.len(),
        });
        ActionResponse::json(StatusCode::OK, &body)
    }
}
