// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token issuance.

use crate::db::TokenStore;
use crate::error::Result;
use crate::models::AuthToken;
use crate::time_utils::format_utc_iso8601;
use ring::rand::{SecureRandom, SystemRandom};
use std::time::Duration;
use subtle::ConstantTimeEq;

/// Token lifetime (2 hours). Used for both the KV TTL and `expiresAt`.
pub const TOKEN_TTL_SECONDS: u64 = 2 * 60 * 60;

/// Random bytes per token (256 bits).
const TOKEN_BYTES: usize = 32;

/// Generate a token: 256 random bits as 64 lowercase hex characters.
pub fn generate_token() -> anyhow::Result<String> {
    let mut bytes = [0u8; TOKEN_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| anyhow::anyhow!("System RNG failure"))?;
    Ok(hex::encode(bytes))
}

/// Compare a candidate against the configured password without leaking
/// where they differ.
pub fn password_matches(candidate: &str, secret: &str) -> bool {
    candidate.as_bytes().ct_eq(secret.as_bytes()).into()
}

/// Generate a token, persist it with a TTL, and return it.
pub async fn issue_token(tokens: &TokenStore) -> Result<AuthToken> {
    let ttl = Duration::from_secs(TOKEN_TTL_SECONDS);
    let expires_at = chrono::Utc::now() + chrono::Duration::seconds(TOKEN_TTL_SECONDS as i64);

    let auth_token = AuthToken {
        token: generate_token()?,
        expires_at: format_utc_iso8601(expires_at),
    };

    tokens.save(&auth_token, ttl).await?;

    tracing::info!(expires_at = %auth_token.expires_at, "Issued bearer token");
    Ok(auth_token)
}
