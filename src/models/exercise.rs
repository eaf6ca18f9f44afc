// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise model for storage and API.

use serde::{Deserialize, Serialize};
use serde_json::Number;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// How an exercise is measured: a rep count or a duration in seconds.
///
/// Flattened into the exercise, so it appears on the wire as exactly one of
/// `repCount` or `duration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Measure {
    RepCount(#[cfg_attr(feature = "binding-generation", ts(type = "number"))] Number),
    Duration(#[cfg_attr(feature = "binding-generation", ts(type = "number"))] Number),
}

/// Stored exercise record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Exercise {
    /// Server-assigned identifier (also the key suffix)
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub measure: Measure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "binding-generation", ts(optional))]
    pub video_url: Option<String>,
}
