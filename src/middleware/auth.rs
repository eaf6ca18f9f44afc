// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token authentication middleware.

use crate::error::{AppError, Result};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Extract the token from `Authorization: Bearer <token>`.
///
/// Returns `None` when the header is missing, not valid ASCII, lacks the
/// `Bearer ` prefix, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Middleware that requires a live bearer token.
///
/// Never-issued and expired tokens both fail with 401; the token store
/// cannot tell them apart. No identity is attached to the request.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response> {
    let token = bearer_token(request.headers())
        .ok_or(AppError::Unauthorized)?
        .to_string();

    if state.tokens.get(&token).await?.is_none() {
        tracing::debug!("Rejected unknown or expired bearer token");
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}
