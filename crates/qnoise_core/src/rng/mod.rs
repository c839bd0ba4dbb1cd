//! # Random Variate Infrastructure
//!
//! This module provides the random variate source that drives the stochastic
//! integrators. It wraps a seeded PRNG and offers uniform draws on the open
//! unit interval and standard normal draws via the Ziggurat algorithm.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: seeding is an explicit [`Seed`] parameter of the
//!   source, never ambient global state, so tests can inject determinism
//! - **Efficiency**: zero-allocation batch generation via `&mut [f64]` slices
//! - **Robust auto-seeding**: entropy seeding falls back to a time-based
//!   value rather than aborting when the entropy source is unavailable
//!
//! ## Usage Example
//!
//! ```rust
//! use qnoise_core::rng::{NoiseRng, Seed};
//!
//! // Create a seeded source for reproducible runs
//! let mut rng = NoiseRng::new(Seed::Manual(12345));
//!
//! // Uniform draw on the open interval (0, 1)
//! let uniform_value = rng.gen_uniform01();
//! assert!(uniform_value > 0.0 && uniform_value < 1.0);
//!
//! // Standard normal draw (mean = 0, std = 1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into a pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod source;

// Public re-exports
pub use source::{NoiseRng, Seed};
