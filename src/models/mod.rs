// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod auth;
pub mod exercise;
pub mod workout;

pub use auth::AuthToken;
pub use exercise::{Exercise, Measure};
pub use workout::{ExerciseEntry, Workout};
