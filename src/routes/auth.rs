// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Password login and logout.

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

use super::body::MalformedBody;
use crate::error::{AppError, Result};
use crate::middleware::auth::bearer_token;
use crate::models::AuthToken;
use crate::services::{issue_token, password_matches};
use crate::AppState;

/// Public auth routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth", post(authenticate))
}

/// Auth routes that require a bearer token.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/auth/logout", post(logout))
}

/// Exchange the shared password for a bearer token.
async fn authenticate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<AuthToken>> {
    let body = MalformedBody::BadRequest.parse(&body)?;

    let password = body
        .get("password")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;

    if !password_matches(password, &state.config.auth_password) {
        tracing::warn!("Rejected login with wrong password");
        return Err(AppError::Unauthorized);
    }

    Ok(Json(issue_token(&state.tokens).await?))
}

/// Revoke the presented token before its TTL runs out.
async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Result<StatusCode> {
    let token = bearer_token(&headers).ok_or(AppError::Unauthorized)?;
    state.tokens.delete(token).await?;

    tracing::info!("Bearer token revoked");
    Ok(StatusCode::NO_CONTENT)
}
