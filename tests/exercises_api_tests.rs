// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise CRUD over HTTP.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_exercise, create_test_app, send, send_empty, send_json, valid_token};

#[tokio::test]
async fn test_create_then_get_returns_same_exercise() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/exercises",
        &token,
        json!({ "name": "Push-ups", "repCount": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
    assert_eq!(created["name"], "Push-ups");
    assert_eq!(created["repCount"], 10);
    assert!(created.get("duration").is_none());

    let (status, fetched) = send_empty(&app, "GET", &format!("/api/exercises/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_client_id() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (_, created) = send_json(
        &app,
        "POST",
        "/api/exercises",
        &token,
        json!({ "id": "mine", "name": "Plank", "duration": 60 }),
    )
    .await;

    assert_ne!(created["id"], "mine");
}

#[tokio::test]
async fn test_create_invalid_exercise() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, error) = send_json(
        &app,
        "POST",
        "/api/exercises",
        &token,
        json!({ "name": "Both", "repCount": 10, "duration": 60 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Exercise cannot have both repCount and duration");

    let (_, listed) = send_empty(&app, "GET", "/api/exercises", &token).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_create_with_malformed_json_is_internal_error() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, error) = send(
        &app,
        "POST",
        "/api/exercises",
        Some(&token),
        Some("{not json".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error, json!({ "error": "Internal server error" }));
}

#[tokio::test]
async fn test_list_exercises() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let a = create_exercise(&app, &token, json!({ "name": "Push-ups", "repCount": 10 })).await;
    let b = create_exercise(&app, &token, json!({ "name": "Plank", "duration": 60 })).await;

    let (status, listed) = send_empty(&app, "GET", "/api/exercises", &token).await;

    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    ids.sort();
    let mut expected = vec![a.as_str(), b.as_str()];
    expected.sort();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_get_missing_exercise() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, error) = send_empty(&app, "GET", "/api/exercises/nope", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Exercise not found");
}

#[tokio::test]
async fn test_update_is_full_replace_with_url_id() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    let id = create_exercise(
        &app,
        &token,
        json!({ "name": "Push-ups", "repCount": 10, "imageUrl": "https://example.com/a.jpg" }),
    )
    .await;

    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/exercises/{id}"),
        &token,
        json!({ "id": "other", "name": " Wall sit ", "duration": 45 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({ "id": id, "name": "Wall sit", "duration": 45 })
    );

    let (_, fetched) = send_empty(&app, "GET", &format!("/api/exercises/{id}"), &token).await;
    assert_eq!(fetched, updated);

    let (status, _) = send_empty(&app, "GET", "/api/exercises/other", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_exercise() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/exercises/nope",
        &token,
        json!({ "name": "Push-ups", "repCount": 10 }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_invalid_body() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    let id = create_exercise(&app, &token, json!({ "name": "Push-ups", "repCount": 10 })).await;

    let (status, error) = send_json(
        &app,
        "PUT",
        &format!("/api/exercises/{id}"),
        &token,
        json!({ "name": "Push-ups", "repCount": 0 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "repCount must be positive");
}

#[tokio::test]
async fn test_delete_then_redelete_is_not_found() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    let id = create_exercise(&app, &token, json!({ "name": "Push-ups", "repCount": 10 })).await;
    let uri = format!("/api/exercises/{id}");

    let (status, body) = send_empty(&app, "DELETE", &uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, _) = send_empty(&app, "GET", &uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_empty(&app, "DELETE", &uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_empty(&app, "DELETE", "/api/exercises/never-existed", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
