//! Configuration error types.

use thiserror::Error;

/// Configuration loading error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The source could not be opened or read.
    #[error("failed to read config file {origin}: {error}")]
    SourceUnavailable {
        origin: String,
        #[source]
        error: std::io::Error,
    },
    /// The bytes are not a YAML mapping of the expected shape.
    #[error("failed to parse config {origin}: {error}")]
    MalformedSource {
        origin: String,
        #[source]
        error: serde_yaml::Error,
    },
    #[error("validation failed: {0}")]
    Validation(String),
}
