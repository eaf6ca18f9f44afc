// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout CRUD routes.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::body::MalformedBody;
use crate::error::{AppError, Result};
use crate::models::Workout;
use crate::validation::validate_workout_data;
use crate::AppState;

/// Workout routes (require authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts", get(list_workouts).post(create_workout))
        .route(
            "/api/workouts/{id}",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
}

const BODY_POLICY: MalformedBody = MalformedBody::Internal;

/// Load a workout or fail with 404.
pub(crate) async fn require_workout(state: &AppState, id: &str) -> Result<Workout> {
    state
        .workouts
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound("Workout not found".to_string()))
}

async fn create_workout(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Workout>)> {
    let body = BODY_POLICY.parse(&body)?;
    let data = validate_workout_data(&body)?;

    let workout = Workout::new(uuid::Uuid::new_v4().to_string(), data.name);
    state.workouts.save(&workout).await?;

    tracing::info!(workout_id = %workout.id, name = %workout.name, "Workout created");
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn list_workouts(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Workout>>> {
    Ok(Json(state.workouts.list().await?))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Workout>> {
    Ok(Json(require_workout(&state, &id).await?))
}

/// Rename a workout; its exercise list is untouched.
async fn update_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Workout>> {
    let mut workout = require_workout(&state, &id).await?;

    let body = BODY_POLICY.parse(&body)?;
    workout.name = validate_workout_data(&body)?.name;

    state.workouts.save(&workout).await?;

    tracing::info!(workout_id = %workout.id, "Workout renamed");
    Ok(Json(workout))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    require_workout(&state, &id).await?;
    state.workouts.delete(&id).await?;

    tracing::info!(workout_id = %id, "Workout deleted");
    Ok(StatusCode::NO_CONTENT)
}
