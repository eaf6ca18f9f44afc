// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Validation for linking exercises into workouts.

use super::bad_request;
use crate::error::Result;
use serde_json::Value;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddExercise {
    pub exercise_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub exercise_ids: Vec<String>,
}

pub fn validate_add_exercise(data: &Value) -> Result<AddExercise> {
    let fields = data
        .as_object()
        .ok_or_else(|| bad_request("Invalid request body"))?;

    let exercise_id = fields
        .get("exerciseId")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| bad_request("exerciseId is required"))?;

    Ok(AddExercise {
        exercise_id: exercise_id.to_string(),
    })
}

/// Checks shape only; membership against the workout is checked by
/// [`crate::models::Workout::reorder`].
pub fn validate_reorder(data: &Value) -> Result<Reorder> {
    let fields = data
        .as_object()
        .ok_or_else(|| bad_request("Invalid request body"))?;

    let raw_ids = fields
        .get("exerciseIds")
        .and_then(Value::as_array)
        .ok_or_else(|| bad_request("exerciseIds must be an array"))?;

    let exercise_ids = raw_ids
        .iter()
        .map(|id| id.as_str().map(str::to_string))
        .collect::<Option<Vec<String>>>()
        .ok_or_else(|| bad_request("exerciseIds must contain only strings"))?;

    let unique: HashSet<&String> = exercise_ids.iter().collect();
    if unique.len() != exercise_ids.len() {
        return Err(bad_request("exerciseIds contains duplicates"));
    }

    Ok(Reorder { exercise_ids })
}
