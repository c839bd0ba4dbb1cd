//! Exact Ornstein-Uhlenbeck transition sampling.
//!
//! For the linear SDE `dx = -x/tau dt + (1/tau) dW` the one-step transition
//! is known in closed form, so the Gaussian reference process can be sampled
//! without discretisation error:
//!
//! ```text
//! x' = x e^(-dt/tau) + sqrt((1 - e^(-2 dt/tau)) / (2 tau)) ξ
//! ```
//!
//! The stationary distribution is N(0, 1/(2*tau)), matching the `q = 1`
//! branch of the Heun integrator, which makes this sampler a convenient
//! cross-check for it.

use crate::rng::NoiseRng;

/// Exact Ornstein-Uhlenbeck transition over a fixed step.
///
/// Constructed once per series; the decay factor and noise amplitude are
/// cached so each step is one multiply-add and one Gaussian draw.
#[derive(Clone, Copy, Debug)]
pub struct OuTransition {
    /// Deterministic decay over one step, `e^(-dt/tau)`.
    decay: f64,
    /// Standard deviation of the stochastic term per step.
    noise_std: f64,
}

impl OuTransition {
    /// Creates a transition context for one series.
    ///
    /// # Arguments
    ///
    /// * `tau` - correlation time
    /// * `resolution` - sampling resolution `H` in steps per unit time
    ///
    /// # Preconditions
    ///
    /// `tau > 0`, `resolution > 0`, both finite; checked in debug builds
    /// only.
    pub fn new(tau: f64, resolution: f64) -> Self {
        debug_assert!(tau > 0.0 && tau.is_finite());
        debug_assert!(resolution > 0.0 && resolution.is_finite());

        let dt = 1.0 / resolution;
        Self {
            decay: (-dt / tau).exp(),
            noise_std: ((1.0 - (-2.0 * dt / tau).exp()) / (2.0 * tau)).sqrt(),
        }
    }

    /// Deterministic decay factor applied to the current value each step.
    #[inline]
    pub fn decay(&self) -> f64 {
        self.decay
    }

    /// Advances the process by one time step, consuming exactly one
    /// Gaussian variate.
    #[inline]
    pub fn step(&self, x: f64, rng: &mut NoiseRng) -> f64 {
        x * self.decay + self.noise_std * rng.gen_normal()
    }
}
