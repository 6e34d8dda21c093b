//! Common test utilities for integration tests.
//!
//! Drives the full axum `Router` in-process through `tower::ServiceExt`,
//! with a fresh in-memory store set per test.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use persistence::Stores;
use serde_json::Value;
use tower::ServiceExt;

use shiftlog_api::{app::create_app, config::Config};

/// Test configuration built from embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// Creates an app plus a handle to its stores for seeding.
pub fn create_test_app() -> (Router, Stores) {
    let stores = Stores::new();
    let app = create_app(test_config(), stores.clone());
    (app, stores)
}

/// Builds a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Builds a bodyless GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

/// Sends a request through the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone()
        .oneshot(request)
        .await
        .expect("Request should not fail at the transport level")
}

/// Reads a response body as JSON.
pub async fn parse_response_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body should be JSON")
}

/// Sends a request and asserts the expected status, returning the JSON body.
pub async fn send_expect(
    app: &Router,
    request: Request<Body>,
    expected: StatusCode,
) -> Value {
    let response = send(app, request).await;
    assert_eq!(response.status(), expected);
    parse_response_body(response).await
}
