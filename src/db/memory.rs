// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process KV backend used for local development and tests.

use super::kv::{KvResult, KvStore};
use dashmap::DashMap;
use futures_util::future::{self, BoxFuture, FutureExt};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// `DashMap`-backed KV store. Expired entries are evicted lazily on read.
#[derive(Clone, Default)]
pub struct MemoryKv {
    entries: Arc<DashMap<String, Entry>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_now(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        let entry = self.entries.get(key)?.clone();
        if entry.is_expired(now) {
            self.entries.remove_if(key, |_, e| e.is_expired(now));
            return None;
        }
        Some(entry.value)
    }

    fn entries_now(&self, prefix: &str) -> Vec<(String, String)> {
        let now = Instant::now();
        let mut entries: Vec<(String, String)> = self
            .entries
            .iter()
            .filter(|e| e.key().starts_with(prefix) && !e.value().is_expired(now))
            .map(|e| (e.key().clone(), e.value().value.clone()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn list_now(&self, prefix: &str) -> Vec<String> {
        self.entries_now(prefix)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    }
}

impl KvStore for MemoryKv {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<Option<String>>> {
        future::ready(Ok(self.get_now(key))).boxed()
    }

    fn put<'a>(
        &'a self,
        key: &'a str,
        value: String,
        ttl: Option<Duration>,
    ) -> BoxFuture<'a, KvResult<()>> {
        let entry = Entry {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        };
        self.entries.insert(key.to_string(), entry);
        future::ready(Ok(())).boxed()
    }

    fn delete<'a>(&'a self, key: &'a str) -> BoxFuture<'a, KvResult<()>> {
        self.entries.remove(key);
        future::ready(Ok(())).boxed()
    }

    fn list<'a>(&'a self, prefix: &'a str) -> BoxFuture<'a, KvResult<Vec<String>>> {
        future::ready(Ok(self.list_now(prefix))).boxed()
    }

    fn list_entries<'a>(
        &'a self,
        prefix: &'a str,
    ) -> BoxFuture<'a, KvResult<Vec<(String, String)>>> {
        future::ready(Ok(self.entries_now(prefix))).boxed()
    }
}
