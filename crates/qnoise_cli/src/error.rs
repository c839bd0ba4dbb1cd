//! CLI error types.

use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error.
#[derive(Error, Debug)]
pub enum CliError {
    /// The series configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] qnoise_core::ConfigError),

    /// The output destination could not be written.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
