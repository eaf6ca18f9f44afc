// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The key-value namespace every store is built on.

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::{stream, StreamExt, TryStreamExt};
use std::time::Duration;

/// Concurrent reads issued by the default [`KvStore::list_entries`].
const MAX_CONCURRENT_DB_OPS: usize = 50;

/// Errors raised by a KV backend.
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("KV backend not connected")]
    Offline,

    #[error("KV backend error: {0}")]
    Backend(String),
}

pub type KvResult<T> = std::result::Result<T, KvError>;

/// An async string-to-string map with optional per-entry expiry.
///
/// Entries whose TTL has elapsed must read back as absent and must not be
/// returned by `list`.
pub trait KvStore: Send + Sync {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>>;

    fn put<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Option<Duration>,
    ) -> BoxFuture<'a, KvResult<()>>;

    /// Removing a missing key is not an error.
    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>>;

    /// Live keys starting with `prefix`, in lexicographic order.
    fn list<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, KvResult<Vec<String>>>;

    /// Live `(key, value)` pairs starting with `prefix`, in key order.
    ///
    /// The default lists keys and then reads each one, dropping keys that
    /// vanish in between. Backends that get values with the listing
    /// should override it.
    fn list_entries<'a>(
        &'a self,
        prefix: &'a str,
    ) -> BoxFuture<'a, KvResult<Vec<(String, String)>>> {
        async move {
            let keys = self.list(prefix).await?;
            let entries: Vec<Option<(String, String)>> = stream::iter(keys)
                .map(|key| async move {
                    let value = self.get(&key).await?;
                    Ok::<_, KvError>(value.map(|value| (key, value)))
                })
                .buffered(MAX_CONCURRENT_DB_OPS)
                .try_collect()
                .await?;
            Ok(entries.into_iter().flatten().collect())
        }
        .boxed()
    }
}
