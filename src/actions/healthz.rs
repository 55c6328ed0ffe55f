//! Liveness probe action.

use axum::http::StatusCode;
use serde_json::json;

use crate::actions::ActionHandler;
use crate::http::request::ActionRequest;
use crate::http::response::ActionResponse;

/// Exact-match action at `/healthz`; reports that the dispatcher is up.
pub struct HealthzAction;

impl ActionHandler for HealthzAction {
    fn handle(&mut self, _request: ActionRequest) -> ActionResponse {
        ActionResponse::json(StatusCode::OK, &json!({ "status": "ok" }))
    }
}
