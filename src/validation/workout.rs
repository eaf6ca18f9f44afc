// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout body validation.

use super::bad_request;
use crate::error::Result;
use serde_json::Value;

/// Validated create/update body for a workout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutData {
    pub name: String,
}

pub fn validate_workout_data(data: &Value) -> Result<WorkoutData> {
    let fields = data
        .as_object()
        .ok_or_else(|| bad_request("Invalid request body"))?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| bad_request("Name is required"))?;

    Ok(WorkoutData {
        name: name.to_string(),
    })
}
