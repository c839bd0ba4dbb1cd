//! # Series Generation
//!
//! The driver layer around the integrators: validated configuration,
//! explicit transient discard policy, and the generation loop that turns a
//! parameter set into a recorded noise trajectory.
//!
//! ## Usage Example
//!
//! ```rust
//! use qnoise_core::series::{NoiseKind, SeriesConfig, SeriesGenerator, Transient};
//! use qnoise_core::rng::Seed;
//!
//! let config = SeriesConfig::builder()
//!     .kind(NoiseKind::OrnsteinUhlenbeck)
//!     .tau(1.0)
//!     .resolution(100.0)
//!     .n_samples(1_000)
//!     .seed(Seed::Manual(42))
//!     .transient(Transient::Fixed(0))
//!     .build()
//!     .unwrap();
//!
//! let series = SeriesGenerator::new(config).generate();
//! assert_eq!(series.len(), 1_000);
//! ```

mod config;
mod error;
mod generator;

// Public re-exports
pub use config::{NoiseKind, SeriesConfig, SeriesConfigBuilder, Transient, MAX_SAMPLES};
pub use error::ConfigError;
pub use generator::SeriesGenerator;
