//! Error types for mr-core

use thiserror::Error;

/// Core error type for migrun
///
/// Missing or unreadable scripts are not errors; the runner reports them
/// inline and keeps going. Only configuration and output failures end up here.
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: IO error with file path context
    #[error("[E003] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E004: Failed to write preview output
    #[error("[E004] Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// E005: YAML parse error
    #[error("[E005] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
