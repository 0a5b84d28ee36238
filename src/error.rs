//! Error types for the fallible edges of the app (config loading).
//!
//! Views and the shell themselves cannot fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config version {found} is older than the minimum supported version {min}")]
    UnsupportedVersion { found: u32, min: u32 },

    #[error("unknown colour token `{0}`")]
    InvalidToken(String),

    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String),

    #[error("browser storage is unavailable")]
    Storage,
}
