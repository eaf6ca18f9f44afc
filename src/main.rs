// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker API Server
//!
//! Serves the password-gated exercise and workout API on top of the
//! configured key-value backend.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::{Config, KvBackend},
    db::{FirestoreKv, KvStore, MemoryKv},
    AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(port = config.port, backend = ?config.kv_backend, "Starting Workout-Tracker API");

    let kv: Arc<dyn KvStore> = match config.kv_backend {
        KvBackend::Memory => {
            tracing::warn!("Using in-memory KV store; data is lost on restart");
            Arc::new(MemoryKv::new())
        }
        KvBackend::Firestore => Arc::new(FirestoreKv::new(&config.gcp_project_id).await?),
    };

    // Build shared state
    let state = Arc::new(AppState::new(config.clone(), kv));

    // Build router
    let app = workout_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_tracker=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
