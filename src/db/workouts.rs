// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout persistence under `workouts:<id>`.

use super::{prefixes, JsonCollection, KvStore};
use crate::error::Result;
use crate::models::Workout;
use std::sync::Arc;

#[derive(Clone)]
pub struct WorkoutStore {
    records: JsonCollection,
}

impl WorkoutStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            records: JsonCollection::new(kv, prefixes::WORKOUTS),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Workout>> {
        self.records.get(id).await
    }

    /// Write the whole workout, including its exercise list.
    pub async fn save(&self, workout: &Workout) -> Result<()> {
        self.records.put(&workout.id, workout, None).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.records.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Workout>> {
        self.records.list().await
    }
}
