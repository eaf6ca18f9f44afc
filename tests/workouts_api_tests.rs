// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD over HTTP.

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{create_test_app, create_workout, send, send_empty, send_json, valid_token};

#[tokio::test]
async fn test_create_workout_starts_empty() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/workouts",
        &token,
        json!({ "name": "  Push Day " }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Push Day");
    assert_eq!(created["exercises"], json!([]));

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send_empty(&app, "GET", &format!("/api/workouts/{id}"), &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_workout_requires_name() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, error) = send_json(&app, "POST", "/api/workouts", &token, json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "Name is required");
}

#[tokio::test]
async fn test_create_workout_with_malformed_json_is_internal_error() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/workouts",
        Some(&token),
        Some("name=Push".to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_list_workouts() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    create_workout(&app, &token, "Push Day").await;
    create_workout(&app, &token, "Pull Day").await;

    let (status, listed) = send_empty(&app, "GET", "/api/workouts", &token).await;

    assert_eq!(status, StatusCode::OK);
    let mut names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Pull Day", "Push Day"]);
}

#[tokio::test]
async fn test_rename_keeps_exercises() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    let id = create_workout(&app, &token, "Push Day").await;
    let exercise_id =
        common::create_exercise(&app, &token, json!({ "name": "Push-ups", "repCount": 10 })).await;
    send_json(
        &app,
        "POST",
        &format!("/api/workouts/{id}/exercises"),
        &token,
        json!({ "exerciseId": exercise_id }),
    )
    .await;

    let (status, renamed) = send_json(
        &app,
        "PUT",
        &format!("/api/workouts/{id}"),
        &token,
        json!({ "name": "Chest Day", "exercises": [] }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Chest Day");
    assert_eq!(
        renamed["exercises"],
        json!([{ "exerciseId": exercise_id, "order": 0 }])
    );
}

#[tokio::test]
async fn test_missing_workout_is_not_found() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;

    let (status, error) = send_empty(&app, "GET", "/api/workouts/nope", &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "Workout not found");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/workouts/nope",
        &token,
        json!({ "name": "Leg Day" }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_workout() {
    let (app, state) = create_test_app();
    let token = valid_token(&state).await;
    let id = create_workout(&app, &token, "Push Day").await;
    let uri = format!("/api/workouts/{id}");

    let (status, _) = send_empty(&app, "DELETE", &uri, &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send_empty(&app, "DELETE", &uri, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
