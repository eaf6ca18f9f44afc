// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise validation.

use super::bad_request;
use crate::error::Result;
use crate::models::{Exercise, Measure};
use serde_json::{Map, Number, Value};
use validator::ValidateUrl;

/// Validate and normalize an exercise body.
///
/// - `name` must be a non-blank string and is trimmed
/// - exactly one of `repCount` / `duration` must be a positive number
/// - `imageUrl` / `videoUrl`, when present and non-empty, must be absolute URLs
///
/// Unknown fields are dropped. `id` is carried over when it is a string and
/// left empty otherwise; callers overwrite it before saving.
pub fn validate_exercise(data: &Value) -> Result<Exercise> {
    let fields = data
        .as_object()
        .ok_or_else(|| bad_request("Exercise data must be an object"))?;

    let name = fields
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| bad_request("Exercise name is required and must be a non-empty string"))?;

    let measure = match (number(fields, "repCount"), number(fields, "duration")) {
        (None, None) => return Err(bad_request("Exercise must have either repCount or duration")),
        (Some(_), Some(_)) => return Err(bad_request("Exercise cannot have both repCount and duration")),
        (Some(reps), None) if !is_positive(reps) => {
            return Err(bad_request("repCount must be positive"))
        }
        (None, Some(secs)) if !is_positive(secs) => {
            return Err(bad_request("duration must be positive"))
        }
        (Some(reps), None) => Measure::RepCount(reps.clone()),
        (None, Some(secs)) => Measure::Duration(secs.clone()),
    };

    let image_url = optional_url(fields, "imageUrl", "imageUrl must be a valid URL")?;
    let video_url = optional_url(fields, "videoUrl", "videoUrl must be a valid URL")?;

    Ok(Exercise {
        id: fields
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        name: name.to_string(),
        measure,
        image_url,
        video_url,
    })
}

/// A field counts as present only when it holds a JSON number.
fn number<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Number> {
    fields.get(key).and_then(|v| v.as_number())
}

fn is_positive(n: &Number) -> bool {
    n.as_f64().is_some_and(|v| v > 0.0)
}

/// Absent, `null` and `""` all mean "no URL".
fn optional_url(
    fields: &Map<String, Value>,
    key: &str,
    message: &str,
) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(url)) if url.is_empty() => Ok(None),
        Some(Value::String(url)) if url.as_str().validate_url() => Ok(Some(url.clone())),
        Some(_) => Err(bad_request(message)),
    }
}
