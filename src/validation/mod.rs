// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request body validation.
//!
//! Validators take the already-parsed JSON body and either return a
//! normalized value or `AppError::BadRequest` with a client-facing message.

pub mod exercise;
pub mod workout;
pub mod workout_exercises;

pub use exercise::validate_exercise;
pub use workout::{validate_workout_data, WorkoutData};
pub use workout_exercises::{validate_add_exercise, validate_reorder, AddExercise, Reorder};

use crate::error::AppError;

pub(crate) fn bad_request(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
