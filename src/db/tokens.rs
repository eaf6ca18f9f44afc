// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token persistence under `tokens:<token>`, with KV expiry.

use super::{prefixes, JsonCollection, KvStore};
use crate::error::Result;
use crate::models::AuthToken;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct TokenStore {
    records: JsonCollection,
}

impl TokenStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            records: JsonCollection::new(kv, prefixes::TOKENS),
        }
    }

    /// Look up a token. Expired tokens read back as `None`.
    pub async fn get(&self, token: &str) -> Result<Option<AuthToken>> {
        self.records.get(token).await
    }

    pub async fn save(&self, auth_token: &AuthToken, ttl: Duration) -> Result<()> {
        self.records
            .put(&auth_token.token, auth_token, Some(ttl))
            .await
    }

    pub async fn delete(&self, token: &str) -> Result<()> {
        self.records.delete(token).await
    }
}
