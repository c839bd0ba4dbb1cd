//! Series generation configuration.
//!
//! This module provides the configuration type and builder for noise series
//! generation, with validation at build time.

use crate::rng::Seed;

use super::error::ConfigError;

/// Maximum number of samples allowed per generated series.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Noise family to generate.
///
/// Static dispatch enum: the generator matches on the kind once per series,
/// never inside the step loop.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseKind {
    /// q-generalized colored noise via the stochastic Heun scheme.
    QNoise {
        /// Shape parameter: `q = 1` is colored Gaussian (Ornstein-Uhlenbeck),
        /// `q < 1` bounded, `q > 1` heavy-tailed.
        q: f64,
    },

    /// q-noise with the correlation time rescaled by `(5 - 3q)/2` so that
    /// autocorrelation time and variance stay approximately independent
    /// of `q`.
    QNoiseNormalised {
        /// Shape parameter; must satisfy `q < 5/3` for the rescaled
        /// correlation time to remain positive.
        q: f64,
    },

    /// Colored Gaussian noise from the exact Ornstein-Uhlenbeck transition.
    OrnsteinUhlenbeck,

    /// Independent standard Gaussian samples.
    WhiteNoise,
}

impl NoiseKind {
    /// Whether this kind integrates an SDE and therefore needs `tau` and a
    /// sampling resolution.
    #[inline]
    pub fn is_correlated(&self) -> bool {
        !matches!(self, NoiseKind::WhiteNoise)
    }
}

/// Transient discard policy.
///
/// The first steps of a series start from an arbitrary initial value, not
/// from the stationary distribution; the warm-up window discarded before
/// recording is an explicit, separately testable policy rather than an
/// implicit formula buried in the driver loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transient {
    /// Discard `ceil(2*tau*H)` steps, i.e. two correlation times of model
    /// time at the configured resolution. Always discards at least one step
    /// for valid parameters.
    Auto,

    /// Discard exactly this many steps. `Fixed(0)` records from the first
    /// step.
    Fixed(usize),
}

/// Noise series configuration.
///
/// Immutable configuration specifying one series. Use
/// [`SeriesConfig::builder`] to construct instances; validation happens at
/// build time so generation itself cannot fail.
///
/// # Examples
///
/// ```rust
/// use qnoise_core::series::{NoiseKind, SeriesConfig, Transient};
/// use qnoise_core::rng::Seed;
///
/// let config = SeriesConfig::builder()
///     .kind(NoiseKind::QNoise { q: 0.5 })
///     .tau(1.0)
///     .resolution(100.0)
///     .n_samples(10_000)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_samples(), 10_000);
/// assert_eq!(config.transient_len(), 200);
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesConfig {
    /// Noise family.
    kind: NoiseKind,
    /// Correlation time (unused by white noise).
    tau: f64,
    /// Sampling resolution H in steps per unit time (unused by white noise).
    resolution: f64,
    /// Number of samples to record.
    n_samples: usize,
    /// Transient discard policy.
    transient: Transient,
    /// Seeding strategy.
    seed: Seed,
}

impl SeriesConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SeriesConfigBuilder {
        SeriesConfigBuilder::default()
    }

    /// Returns the noise family.
    #[inline]
    pub fn kind(&self) -> NoiseKind {
        self.kind
    }

    /// Returns the correlation time.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Returns the sampling resolution H in steps per unit time.
    #[inline]
    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Returns the number of samples to record.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Returns the transient discard policy.
    #[inline]
    pub fn transient(&self) -> Transient {
        self.transient
    }

    /// Returns the seeding strategy.
    #[inline]
    pub fn seed(&self) -> Seed {
        self.seed
    }

    /// Correlation time actually integrated with.
    ///
    /// For [`NoiseKind::QNoiseNormalised`] this is `tau * (5 - 3q) / 2`;
    /// the configured `tau` otherwise.
    pub fn effective_tau(&self) -> f64 {
        match self.kind {
            NoiseKind::QNoiseNormalised { q } => self.tau * (5.0 - 3.0 * q) / 2.0,
            _ => self.tau,
        }
    }

    /// Number of warm-up steps discarded before recording.
    ///
    /// [`Transient::Auto`] resolves to `ceil(2*tau*H)`; [`Transient::Fixed`]
    /// is taken as given. White noise has no transient.
    pub fn transient_len(&self) -> usize {
        if !self.kind.is_correlated() {
            return 0;
        }
        match self.transient {
            Transient::Auto => (2.0 * self.tau * self.resolution).ceil() as usize,
            Transient::Fixed(steps) => steps,
        }
    }
}

/// Builder for [`SeriesConfig`].
///
/// Provides a fluent API with validation at build time. `kind` and
/// `n_samples` are always required; `tau` and `resolution` are required for
/// every kind except [`NoiseKind::WhiteNoise`].
#[derive(Clone, Debug, Default)]
pub struct SeriesConfigBuilder {
    kind: Option<NoiseKind>,
    tau: Option<f64>,
    resolution: Option<f64>,
    n_samples: Option<usize>,
    transient: Option<Transient>,
    seed: Option<Seed>,
}

impl SeriesConfigBuilder {
    /// Sets the noise family.
    #[inline]
    pub fn kind(mut self, kind: NoiseKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the correlation time (`tau > 0`).
    #[inline]
    pub fn tau(mut self, tau: f64) -> Self {
        self.tau = Some(tau);
        self
    }

    /// Sets the sampling resolution H in steps per unit time (`H > 0`).
    #[inline]
    pub fn resolution(mut self, resolution: f64) -> Self {
        self.resolution = Some(resolution);
        self
    }

    /// Sets the number of samples to record (in `[1, MAX_SAMPLES]`).
    #[inline]
    pub fn n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = Some(n_samples);
        self
    }

    /// Sets the transient discard policy (default: [`Transient::Auto`]).
    #[inline]
    pub fn transient(mut self, transient: Transient) -> Self {
        self.transient = Some(transient);
        self
    }

    /// Sets the seeding strategy (default: [`Seed::Auto`]).
    #[inline]
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required field is missing, a numeric
    /// parameter lies outside its domain, or the normalised variant is
    /// requested with `q >= 5/3`.
    pub fn build(self) -> Result<SeriesConfig, ConfigError> {
        let kind = self.kind.ok_or(ConfigError::InvalidParameter {
            name: "kind",
            value: "must be specified".to_string(),
        })?;

        let n_samples = self.n_samples.ok_or(ConfigError::InvalidParameter {
            name: "n_samples",
            value: "must be specified".to_string(),
        })?;
        if n_samples == 0 || n_samples > MAX_SAMPLES {
            return Err(ConfigError::InvalidSampleCount(n_samples));
        }

        match kind {
            NoiseKind::QNoise { q } if !q.is_finite() => {
                return Err(ConfigError::InvalidShape(q));
            }
            NoiseKind::QNoiseNormalised { q } if !q.is_finite() => {
                return Err(ConfigError::InvalidShape(q));
            }
            NoiseKind::QNoiseNormalised { q } if q >= 5.0 / 3.0 => {
                return Err(ConfigError::UnnormalisableShape(q));
            }
            _ => {}
        }

        let (tau, resolution) = if kind.is_correlated() {
            let tau = self.tau.ok_or(ConfigError::InvalidParameter {
                name: "tau",
                value: "must be specified".to_string(),
            })?;
            if !(tau > 0.0 && tau.is_finite()) {
                return Err(ConfigError::InvalidTau(tau));
            }

            let resolution = self.resolution.ok_or(ConfigError::InvalidParameter {
                name: "resolution",
                value: "must be specified".to_string(),
            })?;
            if !(resolution > 0.0 && resolution.is_finite()) {
                return Err(ConfigError::InvalidResolution(resolution));
            }

            (tau, resolution)
        } else {
            // White noise integrates nothing; keep placeholders so the
            // accessors stay total.
            (self.tau.unwrap_or(1.0), self.resolution.unwrap_or(1.0))
        };

        Ok(SeriesConfig {
            kind,
            tau,
            resolution,
            n_samples,
            transient: self.transient.unwrap_or(Transient::Auto),
            seed: self.seed.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_valid() {
        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.5 })
            .tau(1.0)
            .resolution(100.0)
            .n_samples(10_000)
            .build()
            .unwrap();

        assert_eq!(config.kind(), NoiseKind::QNoise { q: 1.5 });
        assert_eq!(config.tau(), 1.0);
        assert_eq!(config.resolution(), 100.0);
        assert_eq!(config.n_samples(), 10_000);
        assert_eq!(config.transient(), Transient::Auto);
        assert_eq!(config.seed(), Seed::Auto);
    }

    #[test]
    fn test_builder_missing_kind() {
        let result = SeriesConfig::builder().n_samples(100).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "kind", .. })
        ));
    }

    #[test]
    fn test_builder_missing_tau_for_correlated_kinds() {
        let result = SeriesConfig::builder()
            .kind(NoiseKind::OrnsteinUhlenbeck)
            .resolution(100.0)
            .n_samples(100)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "tau", .. })
        ));
    }

    #[test]
    fn test_builder_white_noise_needs_no_tau() {
        let config = SeriesConfig::builder()
            .kind(NoiseKind::WhiteNoise)
            .n_samples(100)
            .build()
            .unwrap();
        assert_eq!(config.transient_len(), 0);
    }

    #[test]
    fn test_builder_invalid_tau() {
        for &tau in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = SeriesConfig::builder()
                .kind(NoiseKind::QNoise { q: 1.0 })
                .tau(tau)
                .resolution(100.0)
                .n_samples(100)
                .build();
            assert!(matches!(result, Err(ConfigError::InvalidTau(_))), "tau = {}", tau);
        }
    }

    #[test]
    fn test_builder_invalid_resolution() {
        let result = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.0 })
            .tau(1.0)
            .resolution(0.0)
            .n_samples(100)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidResolution(_))));
    }

    #[test]
    fn test_builder_invalid_shape() {
        let result = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: f64::NAN })
            .tau(1.0)
            .resolution(100.0)
            .n_samples(100)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidShape(_))));
    }

    #[test]
    fn test_builder_invalid_sample_count() {
        let result = SeriesConfig::builder()
            .kind(NoiseKind::WhiteNoise)
            .n_samples(0)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(0))));

        let result = SeriesConfig::builder()
            .kind(NoiseKind::WhiteNoise)
            .n_samples(MAX_SAMPLES + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidSampleCount(_))));
    }

    #[test]
    fn test_builder_rejects_unnormalisable_shape() {
        let result = SeriesConfig::builder()
            .kind(NoiseKind::QNoiseNormalised { q: 5.0 / 3.0 })
            .tau(1.0)
            .resolution(100.0)
            .n_samples(100)
            .build();
        assert!(matches!(result, Err(ConfigError::UnnormalisableShape(_))));
    }

    #[test]
    fn test_effective_tau_rescaling() {
        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoiseNormalised { q: 1.0 })
            .tau(2.0)
            .resolution(100.0)
            .n_samples(100)
            .build()
            .unwrap();
        // (5 - 3)/2 = 1: q = 1 rescales to the plain correlation time
        assert_eq!(config.effective_tau(), 2.0);

        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.3 })
            .tau(2.0)
            .resolution(100.0)
            .n_samples(100)
            .build()
            .unwrap();
        assert_eq!(config.effective_tau(), 2.0);
    }

    #[test]
    fn test_transient_auto_always_discards() {
        // tau = 1, H = 10 resolves to ceil(20) = 20 discarded steps; even
        // tau = 0.01, H = 10 discards one.
        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.0 })
            .tau(1.0)
            .resolution(10.0)
            .n_samples(100)
            .build()
            .unwrap();
        assert_eq!(config.transient_len(), 20);

        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.0 })
            .tau(0.01)
            .resolution(10.0)
            .n_samples(100)
            .build()
            .unwrap();
        assert_eq!(config.transient_len(), 1);
    }

    #[test]
    fn test_transient_fixed_is_taken_as_given() {
        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.0 })
            .tau(1.0)
            .resolution(10.0)
            .n_samples(100)
            .transient(Transient::Fixed(0))
            .build()
            .unwrap();
        assert_eq!(config.transient_len(), 0);

        let config = SeriesConfig::builder()
            .kind(NoiseKind::QNoise { q: 1.0 })
            .tau(1.0)
            .resolution(10.0)
            .n_samples(100)
            .transient(Transient::Fixed(500))
            .build()
            .unwrap();
        assert_eq!(config.transient_len(), 500);
    }
}
