//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate a unique request ID as early as possible, for tracing
//! - Carry the routing-relevant request data (method, path, query, headers,
//!   buffered body) into action handlers
//!
//! # Design Decisions
//! - Request IDs are UUID v4; a client-supplied `x-request-id` is preserved
//! - The body is buffered up to the configured limit before the handler
//!   runs; actions are small administrative endpoints, not streams

use std::task::{Context, Poll};

use axum::body::Bytes;
use axum::http::{HeaderMap, HeaderValue, Method, Request};
use tower::{Layer, Service};
use uuid::Uuid;

/// Header used to correlate a request across logs and responses.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The request data handed to an action handler.
///
/// Query strings are carried for the handler's benefit but play no part in
/// route matching.
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// HTTP method.
    pub method: Method,

    /// Path portion of the URL, exactly as matched.
    pub path: String,

    /// Raw query string, if any.
    pub query: Option<String>,

    /// Request headers.
    pub headers: HeaderMap,

    /// Correlation ID assigned by the request-ID layer.
    pub request_id: String,

    /// Buffered request body.
    pub body: Bytes,
}

/// Tower layer that stamps every request with an `x-request-id` header.
#[derive(Debug, Clone, Default)]
pub struct RequestIdLayer;

impl<S> Layer<S> for RequestIdLayer {
    type Service = RequestIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestIdService { inner }
    }
}

/// Service wrapper produced by [`RequestIdLayer`].
#[derive(Debug, Clone)]
pub struct RequestIdService<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for RequestIdService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        if !request.headers().contains_key(X_REQUEST_ID) {
            let id = Uuid::new_v4().to_string();
            if let Ok(value) = HeaderValue::from_str(&id) {
                request.headers_mut().insert(X_REQUEST_ID, value);
            }
        }
        self.inner.call(request)
    }
}

/// Extract the request ID stamped by [`RequestIdLayer`].
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use std::convert::Infallible;

    #[derive(Clone)]
    struct Capture;

    impl Service<Request<Body>> for Capture {
        type Response = Request<Body>;
        type Error = Infallible;
        type Future = std::future::Ready<Result<Self::Response, Self::Error>>;

        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, request: Request<Body>) -> Self::Future {
            std::future::ready(Ok(request))
        }
    }

    #[tokio::test]
    async fn test_layer_adds_request_id() {
        let mut service = RequestIdLayer.layer(Capture);
        let request = Request::builder().body(Body::empty()).unwrap();

        let seen = service.call(request).await.unwrap();
        let id = request_id(seen.headers());
        assert_ne!(id, "unknown");
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[tokio::test]
    async fn test_layer_preserves_existing_request_id() {
        let mut service = RequestIdLayer.layer(Capture);
        let request = Request::builder()
            .header(X_REQUEST_ID, "client-chosen")
            .body(Body::empty())
            .unwrap();

        let seen = service.call(request).await.unwrap();
        assert_eq!(request_id(seen.headers()), "client-chosen");
    }
}
