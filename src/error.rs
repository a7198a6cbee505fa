//! Unified error types for auto-launcher.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for discovery, resolution and launching
#[derive(Debug, Error)]
pub enum LauncherError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("command not found")]
    CommandNotFound,

    #[error("unexpected row data: {0}")]
    UnexpectedRow(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Process error: {0}")]
    Process(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Result type alias for the launcher
pub type Result<T> = std::result::Result<T, LauncherError>;
