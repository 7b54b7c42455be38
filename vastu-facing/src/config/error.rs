//! Configuration loading errors.

use thiserror::Error;

/// Errors from reading, parsing or validating a [`FacingConfig`](super::FacingConfig).
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config: {0}")]
    Io(String),

    #[error("Failed to parse config YAML: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
