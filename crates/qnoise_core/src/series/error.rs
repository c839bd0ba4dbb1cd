//! Error types for series configuration.

use thiserror::Error;

/// Configuration error for noise series generation.
///
/// These errors occur at build time when invalid parameters are provided;
/// once a configuration builds, generation itself cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Correlation time outside the valid domain.
    #[error("invalid correlation time tau = {0}: must be positive and finite")]
    InvalidTau(f64),

    /// Sampling resolution outside the valid domain.
    #[error("invalid resolution H = {0}: must be positive and finite")]
    InvalidResolution(f64),

    /// Shape parameter is NaN or infinite.
    #[error("invalid shape parameter q = {0}: must be finite")]
    InvalidShape(f64),

    /// Sample count outside the valid range.
    #[error("invalid sample count {0}: must be in range [1, 100_000_000]")]
    InvalidSampleCount(usize),

    /// The normalised variant has no positive adjusted correlation time for
    /// this shape parameter.
    #[error("normalised noise requires q < 5/3, got q = {0}")]
    UnnormalisableShape(f64),

    /// A required builder field was not supplied.
    #[error("invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
