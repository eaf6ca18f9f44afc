// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON body parsing with an explicit per-endpoint policy for bodies that
//! are not valid JSON.
//!
//! The login endpoint reports such bodies as 400; the resource endpoints
//! report them as 500. Each route states which policy it uses.

use crate::error::{AppError, Result};
use axum::body::Bytes;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedBody {
    /// 400 `Invalid JSON body`
    BadRequest,
    /// 500 with the generic message
    Internal,
}

impl MalformedBody {
    pub fn parse(self, body: &Bytes) -> Result<Value> {
        serde_json::from_slice(body).map_err(|e| match self {
            MalformedBody::BadRequest => AppError::BadRequest("Invalid JSON body".to_string()),
            MalformedBody::Internal => {
                AppError::Internal(anyhow::Error::new(e).context("Malformed JSON body"))
            }
        })
    }
}
