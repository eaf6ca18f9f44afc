// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout model and its ordered exercise list.
//!
//! Removing and reordering renumber the list so `order` equals the entry's
//! position. Adding appends after the highest stored `order`, which keeps
//! that property for any list these operations produced.

use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// One exercise's membership and position within a workout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExerciseEntry {
    pub exercise_id: String,
    pub order: u32,
}

impl ExerciseEntry {
    pub fn new(exercise_id: impl Into<String>, order: u32) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            order,
        }
    }
}

/// Stored workout record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
}

impl Workout {
    /// A new workout with no exercises.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            exercises: Vec::new(),
        }
    }

    pub fn contains(&self, exercise_id: &str) -> bool {
        self.exercises.iter().any(|e| e.exercise_id == exercise_id)
    }

    /// Append an exercise after the current highest `order`.
    ///
    /// Uses the running maximum, not the list length; gaps in stored
    /// orders are carried forward.
    pub fn add_exercise(&mut self, exercise_id: impl Into<String>) -> Result<()> {
        let exercise_id = exercise_id.into();
        if self.contains(&exercise_id) {
            return Err(AppError::Conflict("Exercise already in workout".to_string()));
        }

        let next_order = match self.exercises.iter().map(|e| e.order).max() {
            None => 0,
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::Internal(anyhow::anyhow!(
                    "Workout {} has no order left after {}",
                    self.id,
                    max
                ))
            })?,
        };
        self.exercises
            .push(ExerciseEntry::new(exercise_id, next_order));
        Ok(())
    }

    /// Remove an exercise and close the gap it leaves.
    pub fn remove_exercise(&mut self, exercise_id: &str) -> Result<()> {
        let index = self
            .exercises
            .iter()
            .position(|e| e.exercise_id == exercise_id)
            .ok_or_else(|| AppError::NotFound("Exercise not in workout".to_string()))?;

        self.exercises.remove(index);
        self.renumber();
        Ok(())
    }

    /// Replace the exercise order with `exercise_ids`, which must be a
    /// permutation of the currently linked ids. On error nothing changes.
    pub fn reorder(&mut self, exercise_ids: Vec<String>) -> Result<()> {
        let mut current: Vec<&str> = self
            .exercises
            .iter()
            .map(|e| e.exercise_id.as_str())
            .collect();
        let mut requested: Vec<&str> = exercise_ids.iter().map(String::as_str).collect();
        current.sort_unstable();
        requested.sort_unstable();

        let unique: HashSet<&str> = requested.iter().copied().collect();
        if current != requested || unique.len() != requested.len() {
            return Err(AppError::BadRequest(
                "exerciseIds must match current exercises".to_string(),
            ));
        }

        self.exercises = exercise_ids
            .into_iter()
            .map(|id| ExerciseEntry::new(id, 0))
            .collect();
        self.renumber();
        Ok(())
    }

    /// Set every entry's `order` to its index.
    pub fn renumber(&mut self) {
        for (order, entry) in (0u32..).zip(self.exercises.iter_mut()) {
            entry.order = order;
        }
    }

    pub fn orders_match_positions(&self) -> bool {
        (0u32..)
            .zip(&self.exercises)
            .all(|(order, entry)| entry.order == order)
    }
}
