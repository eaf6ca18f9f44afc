// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use workout_tracker::config::Config;
use workout_tracker::db::{FirestoreKv, MemoryKv};
use workout_tracker::routes::create_router;
use workout_tracker::services::issue_token;
use workout_tracker::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Connect to the Firestore emulator.
#[allow(dead_code)]
pub async fn test_firestore() -> FirestoreKv {
    FirestoreKv::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app on a fresh in-memory KV store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(
        Config::test_default(),
        Arc::new(MemoryKv::new()),
    ));
    (create_router(state.clone()), state)
}

/// Issue a token directly through the token store.
#[allow(dead_code)]
pub async fn valid_token(state: &AppState) -> String {
    issue_token(&state.tokens).await.unwrap().token
}

/// Send one request and return the status and parsed JSON body
/// (`Value::Null` for an empty body).
#[allow(dead_code)]
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<String>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Authenticated JSON request.
#[allow(dead_code)]
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Value,
) -> (StatusCode, Value) {
    send(app, method, uri, Some(token), Some(body.to_string())).await
}

/// Authenticated request without a body.
#[allow(dead_code)]
pub async fn send_empty(app: &Router, method: &str, uri: &str, token: &str) -> (StatusCode, Value) {
    send(app, method, uri, Some(token), None).await
}

/// Create an exercise over HTTP and return its id.
#[allow(dead_code)]
pub async fn create_exercise(app: &Router, token: &str, body: Value) -> String {
    let (status, created) = send_json(app, "POST", "/api/exercises", token, body).await;
    assert_eq!(status, StatusCode::CREATED);
    created["id"].as_str().unwrap().to_string()
}

/// Create a workout over HTTP and return its id.
#[allow(dead_code)]
pub async fn create_workout(app: &Router, token: &str, name: &str) -> String {
    let (status, created) = send_json(
        app,
        "POST",
        "/api/workouts",
        token,
        serde_json::json!({ "name": name }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    created["id"].as_str().unwrap().to_string()
}
