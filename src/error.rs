use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors that abort startup. Once the app is running every action degrades
/// to a no-op instead.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
