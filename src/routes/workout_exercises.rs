// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Routes that link exercises into a workout's ordered list.
//!
//! Each handler is one read-modify-write of the workout record with no
//! concurrency control; concurrent edits to the same workout can lose
//! updates. All of them return the full updated workout.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{delete, post, put},
    Json, Router,
};
use std::sync::Arc;

use super::body::MalformedBody;
use super::workouts::require_workout;
use crate::error::{AppError, Result};
use crate::models::Workout;
use crate::validation::{validate_add_exercise, validate_reorder};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/workouts/{id}/exercises", post(add_exercise))
        .route("/api/workouts/{id}/exercises/reorder", put(reorder_exercises))
        .route(
            "/api/workouts/{id}/exercises/{exercise_id}",
            delete(remove_exercise),
        )
}

const BODY_POLICY: MalformedBody = MalformedBody::Internal;

async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
    body: Bytes,
) -> Result<Json<Workout>> {
    let mut workout = require_workout(&state, &workout_id).await?;

    let body = BODY_POLICY.parse(&body)?;
    let exercise_id = validate_add_exercise(&body)?.exercise_id;

    // Existence check only; nothing keeps the link valid afterwards.
    if state.exercises.get(&exercise_id).await?.is_none() {
        return Err(AppError::BadRequest("Exercise not found".to_string()));
    }

    workout.add_exercise(exercise_id.as_str())?;
    state.workouts.save(&workout).await?;

    tracing::info!(
        workout_id = %workout.id,
        exercise_id = %exercise_id,
        count = workout.exercises.len(),
        "Exercise linked to workout"
    );
    Ok(Json(workout))
}

async fn remove_exercise(
    State(state): State<Arc<AppState>>,
    Path((workout_id, exercise_id)): Path<(String, String)>,
) -> Result<Json<Workout>> {
    let mut workout = require_workout(&state, &workout_id).await?;

    workout.remove_exercise(&exercise_id)?;
    state.workouts.save(&workout).await?;

    tracing::info!(
        workout_id = %workout.id,
        exercise_id = %exercise_id,
        "Exercise unlinked from workout"
    );
    Ok(Json(workout))
}

async fn reorder_exercises(
    State(state): State<Arc<AppState>>,
    Path(workout_id): Path<String>,
    body: Bytes,
) -> Result<Json<Workout>> {
    let mut workout = require_workout(&state, &workout_id).await?;

    let body = BODY_POLICY.parse(&body)?;
    let exercise_ids = validate_reorder(&body)?.exercise_ids;

    workout.reorder(exercise_ids)?;
    state.workouts.save(&workout).await?;

    tracing::debug!(workout_id = %workout.id, "Workout exercises reordered");
    Ok(Json(workout))
}
