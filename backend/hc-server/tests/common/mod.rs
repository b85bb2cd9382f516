#![allow(dead_code)]

//! Test infrastructure for hc-server API tests

use hc_config::LatencyConfig;
use hc_server::{AppState, build_router};
use hc_session::{MemoryStorage, SessionSettings, SessionStore};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@huahuacuna.org";
pub const ADMIN_SECRET: &str = "admin123";
pub const SPONSOR_EMAIL: &str = "someone@example.com";
pub const SPONSOR_PASSWORD: &str = "password1";

/// AppState over seeded stores, in-memory session, no artificial latency
pub fn create_test_app_state() -> AppState {
    let session = SessionStore::open(Arc::new(MemoryStorage::new()), SessionSettings::immediate())
        .expect("Failed to open session store");

    AppState::seeded(Arc::new(session), LatencyConfig::none())
}

pub async fn signed_in_as_admin() -> AppState {
    let state = create_test_app_state();
    state
        .session
        .sign_in(ADMIN_EMAIL, ADMIN_SECRET)
        .await
        .expect("Admin sign-in failed");
    state
}

pub async fn signed_in_as_sponsor() -> AppState {
    let state = create_test_app_state();
    state
        .session
        .sign_in(SPONSOR_EMAIL, SPONSOR_PASSWORD)
        .await
        .expect("Sponsor sign-in failed");
    state
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: serde_json::Value,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send(state: &AppState, request: Request<Body>) -> TestResponse {
    let response = build_router(state.clone())
        .oneshot(request)
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    TestResponse {
        status,
        headers,
        json,
    }
}

/// Status only; for responses whose body is not JSON
pub async fn get_status(state: &AppState, uri: &str) -> StatusCode {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    build_router(state.clone())
        .oneshot(request)
        .await
        .unwrap()
        .status()
}

pub async fn get(state: &AppState, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}

pub async fn send_json(
    state: &AppState,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

pub async fn post_json(state: &AppState, uri: &str, body: serde_json::Value) -> TestResponse {
    send_json(state, "POST", uri, body).await
}

pub async fn post_empty(state: &AppState, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(state, request).await
}
