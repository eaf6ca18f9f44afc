// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed KV namespace.
//!
//! Every key lives in a single `kv` collection. Keys may contain characters
//! Firestore rejects in document IDs, so the document ID is the URL-safe
//! base64 of the key and the raw key is kept in a `key` field for prefix
//! range queries.
//!
//! `expires_at` is a Firestore timestamp, so a TTL policy on
//! `kv.expires_at` can reclaim expired entries. TTL deletion lags by up to
//! a day, so reads also check expiry and delete what they find expired.

use super::kv::{KvError, KvResult, KvStore};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Utc};
use futures_util::future::{self, BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Collection holding every KV entry.
pub const KV_COLLECTION: &str = "kv";

/// Highest code point Firestore sorts; closes a prefix range.
const PREFIX_RANGE_END: char = '\u{f8ff}';

/// Stored KV entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KvDocument {
    key: String,
    value: String,
    /// Absent for entries that never expire
    #[serde(default, with = "firestore::serialize_as_optional_timestamp")]
    expires_at: Option<DateTime<Utc>>,
}

impl KvDocument {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

fn document_id(key: &str) -> String {
    URL_SAFE_NO_PAD.encode(key.as_bytes())
}

fn backend(e: impl std::fmt::Display) -> KvError {
    KvError::Backend(e.to_string())
}

/// Firestore KV client.
#[derive(Clone)]
pub struct FirestoreKv {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreKv {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> KvResult<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| KvError::Backend(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> KvResult<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            KvError::Backend(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Offline client; every operation fails with `KvError::Offline`.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> KvResult<&firestore::FirestoreDb> {
        self.client.as_ref().ok_or(KvError::Offline)
    }

    async fn get_document(&self, key: &str) -> KvResult<Option<KvDocument>> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(KV_COLLECTION)
            .obj()
            .one(&document_id(key))
            .await
            .map_err(backend)
    }

    /// Delete documents found expired on read. Failures are logged, not
    /// returned.
    async fn purge_expired(&self, keys: Vec<String>) {
        let results =
            future::join_all(keys.iter().map(|key| self.delete_value(key))).await;
        for (key, result) in keys.iter().zip(results) {
            if let Err(e) = result {
                tracing::warn!(key = %key, error = %e, "Failed to delete expired KV entry");
            }
        }
    }

    async fn get_value(&self, key: &str) -> KvResult<Option<String>> {
        let Some(doc) = self.get_document(key).await? else {
            return Ok(None);
        };

        if doc.is_expired(Utc::now()) {
            tracing::debug!(key = %key, "Deleting expired KV entry on read");
            self.purge_expired(vec![doc.key]).await;
            return Ok(None);
        }
        Ok(Some(doc.value))
    }

    async fn put_value(&self, key: &str, value: String, ttl: Option<Duration>) -> KvResult<()> {
        let expires_at = ttl
            .map(|ttl| chrono::Duration::from_std(ttl).map(|ttl| Utc::now() + ttl))
            .transpose()
            .map_err(backend)?;

        let doc = KvDocument {
            key: key.to_string(),
            value,
            expires_at,
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(KV_COLLECTION)
            .document_id(document_id(key))
            .object(&doc)
            .execute()
            .await
            .map_err(backend)?;
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> KvResult<()> {
        self.get_client()?
            .fluent()
            .delete()
            .from(KV_COLLECTION)
            .document_id(document_id(key))
            .execute()
            .await
            .map_err(backend)?;
        Ok(())
    }

    /// One range query returning whole documents, so values come back
    /// with the keys.
    async fn query_prefix(&self, prefix: &str) -> KvResult<Vec<(String, String)>> {
        let start = prefix.to_string();
        let end = format!("{}{}", prefix, PREFIX_RANGE_END);

        let docs: Vec<KvDocument> = self
            .get_client()?
            .fluent()
            .select()
            .from(KV_COLLECTION)
            .filter(move |q| {
                q.for_all([
                    q.field("key").greater_than_or_equal(start.clone()),
                    q.field("key").less_than(end.clone()),
                ])
            })
            .order_by([("key", firestore::FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(backend)?;

        let now = Utc::now();
        let (expired, live): (Vec<KvDocument>, Vec<KvDocument>) =
            docs.into_iter().partition(|doc| doc.is_expired(now));

        if !expired.is_empty() {
            tracing::debug!(prefix = %prefix, count = expired.len(), "Deleting expired KV entries");
            self.purge_expired(expired.into_iter().map(|doc| doc.key).collect())
                .await;
        }

        Ok(live.into_iter().map(|doc| (doc.key, doc.value)).collect())
    }

    async fn list_keys(&self, prefix: &str) -> KvResult<Vec<String>> {
        Ok(self
            .query_prefix(prefix)
            .await?
            .into_iter()
            .map(|(key, _)| key)
            .collect())
    }
}

impl KvStore for FirestoreKv {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>> {
        self.get_value(key).boxed()
    }

    fn put<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Option<Duration>,
    ) -> BoxFuture<'a, KvResult<()>> {
        self.put_value(key, value, ttl).boxed()
    }

    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>> {
        self.delete_value(key).boxed()
    }

    fn list<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, KvResult<Vec<String>>> {
        self.list_keys(prefix).boxed()
    }

    fn list_entries<'a>(
        &'a self,
        prefix: &'a str,
    ) -> BoxFuture<'a, KvResult<Vec<(String, String)>>> {
        self.query_prefix(prefix).boxed()
    }
}
