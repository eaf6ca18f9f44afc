//! Application configuration loaded from environment variables.
//!
//! The shared password is read once at startup and carried in `AppState`;
//! nothing reads it from the environment afterwards.

use std::env;

/// Which key-value backend to persist into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KvBackend {
    /// Process-local map; data is lost on restart.
    Memory,
    /// Google Cloud Firestore (or its emulator).
    Firestore,
}

impl std::str::FromStr for KvBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(KvBackend::Memory),
            "firestore" => Ok(KvBackend::Firestore),
            _ => Err(ConfigError::Invalid("KV_BACKEND", s.to_string())),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// GCP project ID (Firestore backend only)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Storage backend
    pub kv_backend: KvBackend,

    // --- Secrets ---
    /// The single shared password that unlocks the API
    pub auth_password: String,
}

impl Config {
    /// Config for tests only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            kv_backend: KvBackend::Memory,
            auth_password: "test-password".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let auth_password = env::var("AUTH_PASSWORD")
            .map(|v| v.trim().to_string())
            .map_err(|_| ConfigError::Missing("AUTH_PASSWORD"))?;
        if auth_password.is_empty() {
            return Err(ConfigError::Invalid("AUTH_PASSWORD", String::new()));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            kv_backend: env::var("KV_BACKEND")
                .unwrap_or_else(|_| "memory".to_string())
                .parse()?,
            auth_password,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
