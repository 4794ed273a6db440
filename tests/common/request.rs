#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Send a request and collect status and raw response body.
async fn send(app: &Router, request: Request<Body>) -> (u16, String) {
    let response = app.clone().oneshot(request).await.expect("request failed");

    let status = response.status().as_u16();
    let body_bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    (status, String::from_utf8_lossy(&body_bytes).to_string())
}

/// Helper for GET requests returning the raw string body (e.g., HTML responses).
pub async fn get_raw(app: &Router, path: &str) -> (u16, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// Helper for GET requests returning a parsed JSON body.
pub async fn get_json(app: &Router, path: &str) -> (u16, Value) {
    let (status, body) = get_raw(app, path).await;
    let value: Value = serde_json::from_str(&body).unwrap_or_else(|e| {
        panic!("Response is not valid JSON\nStatus: {status} | Path: {path}\nError: {e}\nBody: {body}")
    });
    (status, value)
}

/// Helper to POST a form-encoded body and collect the raw response.
pub async fn post_form(app: &Router, path: &str, body: &str) -> (u16, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Helper to POST a JSON body and collect the raw response.
pub async fn post_json(app: &Router, path: &str, body: Value) -> (u16, String) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();
    send(app, request).await
}
