// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise CRUD routes.

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
use crate::models::Exercise;
use crate::validation::validate_exercise;
use crate::AppState;

/// Exercise routes (require authentication).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercises", get(list_exercises).post(create_exercise))
        .route(
            "/api/exercises/{id}",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
}

/// Malformed bodies on these routes surface as 500.
const BODY_POLICY: MalformedBody = MalformedBody::Internal;

fn not_found() -> AppError {
    AppError::NotFound("Exercise not found".to_string())
}

async fn require_exercise(state: &AppState, id: &str) -> Result<Exercise> {
    state.exercises.get(id).await?.ok_or_else(not_found)
}

async fn create_exercise(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<(StatusCode, Json<Exercise>)> {
    let body = BODY_POLICY.parse(&body)?;
    let mut exercise = validate_exercise(&body)?;
    exercise.id = uuid::Uuid::new_v4().to_string();

    state.exercises.save(&exercise).await?;

    tracing::info!(exercise_id = %exercise.id, name = %exercise.name, "Exercise created");
    Ok((StatusCode::CREATED, Json(exercise)))
}

async fn list_exercises(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Exercise>>> {
    let exercises = state.exercises.list().await?;
    tracing::debug!(count = exercises.len(), "Listed exercises");
    Ok(Json(exercises))
}

async fn get_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Exercise>> {
    Ok(Json(require_exercise(&state, &id).await?))
}

/// Full replace. The URL id wins over any `id` in the body, and fields
/// missing from the body are dropped.
async fn update_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Exercise>> {
    require_exercise(&state, &id).await?;

    let body = BODY_POLICY.parse(&body)?;
    let mut exercise = validate_exercise(&body)?;
    exercise.id = id;

    state.exercises.save(&exercise).await?;

    tracing::info!(exercise_id = %exercise.id, "Exercise updated");
    Ok(Json(exercise))
}

/// Workouts that link this exercise keep their (now dangling) entries.
async fn delete_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    require_exercise(&state, &id).await?;
    state.exercises.delete(&id).await?;

    tracing::info!(exercise_id = %id, "Exercise deleted");
    Ok(StatusCode::NO_CONTENT)
}
