// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise persistence under `exercises:<id>`.

use super::{prefixes, JsonCollection, KvStore};
use crate::error::Result;
use crate::models::Exercise;
use std::sync::Arc;

#[derive(Clone)]
pub struct ExerciseStore {
    records: JsonCollection,
}

impl ExerciseStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            records: JsonCollection::new(kv, prefixes::EXERCISES),
        }
    }

    pub async fn get(&self, id: &str) -> Result<Option<Exercise>> {
        self.records.get(id).await
    }

    /// Create or fully replace an exercise.
    pub async fn save(&self, exercise: &Exercise) -> Result<()> {
        self.records.put(&exercise.id, exercise, None).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.records.delete(id).await
    }

    pub async fn list(&self) -> Result<Vec<Exercise>> {
        self.records.list().await
    }
}
