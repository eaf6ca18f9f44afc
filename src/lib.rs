// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker: a password-gated API for exercises and workouts.
//!
//! This crate provides the backend API: bearer token issuance, CRUD for
//! exercises and workouts, and ordered linking of exercises into workouts,
//! all persisted in a key-value store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::{ExerciseStore, KvStore, TokenStore, WorkoutStore};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub exercises: ExerciseStore,
    pub workouts: WorkoutStore,
    pub tokens: TokenStore,
}

impl AppState {
    /// Build the entity stores on top of a single KV namespace.
    pub fn new(config: Config, kv: Arc<dyn KvStore>) -> Self {
        Self {
            config,
            exercises: ExerciseStore::new(kv.clone()),
            workouts: WorkoutStore::new(kv.clone()),
            tokens: TokenStore::new(kv),
        }
    }
}
