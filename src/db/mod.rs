//! Persistence layer: a key-value namespace plus typed entity stores.

pub mod exercises;
pub mod firestore;
pub mod kv;
pub mod memory;
pub mod tokens;
pub mod workouts;

pub use exercises::ExerciseStore;
pub use firestore::FirestoreKv;
pub use kv::{KvError, KvStore};
pub use memory::MemoryKv;
pub use tokens::TokenStore;
pub use workouts::WorkoutStore;

use crate::error::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Key prefixes as constants.
pub mod prefixes {
    pub const EXERCISES: &str = "exercises:";
    pub const WORKOUTS: &str = "workouts:";
    pub const TOKENS: &str = "tokens:";
}

/// JSON documents stored under one key prefix.
///
/// Shared by the entity stores; each owns exactly the keys under its prefix.
#[derive(Clone)]
pub(crate) struct JsonCollection {
    kv: Arc<dyn KvStore>,
    prefix: &'static str,
}

impl JsonCollection {
    pub(crate) fn new(kv: Arc<dyn KvStore>, prefix: &'static str) -> Self {
        Self { kv, prefix }
    }

    fn key(&self, id: &str) -> String {
        format!("{}{}", self.prefix, id)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, id: &str) -> Result<Option<T>> {
        let key = self.key(id);
        match self.kv.get(&key).await? {
            Some(raw) => serde_json::from_str(&raw).map(Some).map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Corrupt record at {}: {}", key, e))
            }),
            None => Ok(None),
        }
    }

    pub(crate) async fn put<T: Serialize>(
        &self,
        id: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<()> {
        let raw = serde_json::to_string(value).map_err(anyhow::Error::from)?;
        self.kv.put(&self.key(id), raw, ttl).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, id: &str) -> Result<()> {
        self.kv.delete(&self.key(id)).await?;
        Ok(())
    }

    /// Fetch every record under the prefix, skipping ones that fail to
    /// parse.
    pub(crate) async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>> {
        let entries = self.kv.list_entries(self.prefix).await?;

        Ok(entries
            .into_iter()
            .filter_map(|(key, value)| match serde_json::from_str(&value) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!(key = %key, error = %e, "Skipping unparsable record");
                    None
                }
            })
            .collect())
    }
}
