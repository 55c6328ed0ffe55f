//! End-to-end dispatch through the HTTP front end.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::Value;

use registry_router::actions::{builtin_actions, ActionHandler, BoxedHandler};
use registry_router::http::{ActionRequest, ActionResponse, X_REQUEST_ID};
use registry_router::routing::ActionDescriptor;

mod common;

#[tokio::test]
async fn dispatches_exact_action() {
    let (addr, _shutdown) = common::start_dispatcher(builtin_actions()).await;

    let response = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert!(response.headers().contains_key(X_REQUEST_ID));

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn exact_action_does_not_match_subpaths() {
    let (addr, _shutdown) = common::start_dispatcher(builtin_actions()).await;

    let response = reqwest::get(format!("http://{addr}/healthz/extra"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn prefix_action_receives_the_full_path() {
    let (addr, _shutdown) = common::start_dispatcher(builtin_actions()).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/echo/deep/path?x=1"))
        .body("hello")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["method"], "POST");
    assert_eq!(body["path"], "/echo/deep/path");
    assert_eq!(body["query"], "x=1");
    assert_eq!(body["body_bytes"], 5);
}

#[tokio::test]
async fn unmatched_path_returns_not_found() {
    let (addr, _shutdown) = common::start_dispatcher(builtin_actions()).await;

    let response = reqwest::get(format!("http://{addr}/ulysses")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(X_REQUEST_ID));
    assert_eq!(response.text().await.unwrap(), "Not Found");
}

#[tokio::test]
async fn client_request_id_is_echoed() {
    let (addr, _shutdown) = common::start_dispatcher(builtin_actions()).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/healthz"))
        .header(X_REQUEST_ID, "my-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(X_REQUEST_ID).unwrap(),
        "my-correlation-id"
    );
}

struct CountingAction {
    instance_number: usize,
}

impl ActionHandler for CountingAction {
    fn handle(&mut self, _request: ActionRequest) -> ActionResponse {
        ActionResponse::text(StatusCode::OK, self.instance_number.to_string())
    }
}

#[tokio::test]
async fn each_request_gets_a_fresh_handler_instance() {
    let instances = Arc::new(AtomicUsize::new(0));
    let counter = instances.clone();
    let descriptor = ActionDescriptor::exact("/counted", move || {
        Box::new(CountingAction {
            instance_number: counter.fetch_add(1, Ordering::SeqCst) + 1,
        }) as BoxedHandler
    });

    let (addr, _shutdown) = common::start_dispatcher(vec![descriptor]).await;

    let first = reqwest::get(format!("http://{addr}/counted")).await.unwrap();
    let second = reqwest::get(format!("http://{addr}/counted")).await.unwrap();
    assert_eq!(first.text().await.unwrap(), "1");
    assert_eq!(second.text().await.unwrap(), "2");
    assert_eq!(instances.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn longest_prefix_wins_over_the_wire() {
    let descriptors = vec![
        ActionDescriptor::prefix("/prefix", || {
            Box::new(NamedAction { name: "short" }) as BoxedHandler
        }),
        ActionDescriptor::prefix("/prefix/long", || {
            Box::new(NamedAction { name: "long" }) as BoxedHandler
        }),
    ];
    let (addr, _shutdown) = common::start_dispatcher(descriptors).await;

    let longer = reqwest::get(format!("http://{addr}/prefix/longer"))
        .await
        .unwrap();
    assert_eq!(longer.text().await.unwrap(), "long");

    let cat = reqwest::get(format!("http://{addr}/prefix/cat")).await.unwrap();
    assert_eq!(cat.text().await.unwrap(), "short");
}

struct NamedAction {
    name: &'static str,
}

impl ActionHandler for NamedAction {
    fn handle(&mut self, _request: ActionRequest) -> ActionResponse {
        ActionResponse::text(StatusCode::OK, self.name)
    }
}
