//! Stochastic Heun step for the colored noise process.
//!
//! # Scheme
//!
//! For the SDE `dx = f(x) dt + g dW` with constant diffusion `g = 1/tau`,
//! one step of the Heun (predictor-corrector) scheme is
//!
//! ```text
//! predictor:  x* = x + f(x) dt + g ΔW
//! corrector:  x' = x + ½ [f(x) + f(x*)] dt + g ΔW
//! ```
//!
//! with the same Wiener increment `ΔW = ξ √dt` in both stages. Averaging the
//! two drift evaluations is what lifts the scheme above plain Euler-Maruyama
//! accuracy.
//!
//! # Bounded regime
//!
//! For `q < 1` the stationary density lives on `|x| < 1/sqrt(tau*(1-q))` and
//! the drift formula changes sign outside that interval, so an overshooting
//! step must not be fed back into the drift. The step confines its output
//! deterministically (Euler fallback for an escaped predictor, reflection of
//! the final candidate, restart from the support centre as a last resort)
//! without consuming any additional random draws.

use crate::rng::NoiseRng;

use super::drift::Drift;

/// Per-series Heun integrator context.
///
/// Constructed once per series from the physical parameters; caches every
/// derived constant the step needs (`dt = 1/H`, `sqrt(H)`, the noise scale
/// `1/(tau*sqrt(H))`, the drift branch, and the `q < 1` support cutoff) so
/// the hot loop performs no square roots and no repeated floating-point
/// comparisons.
///
/// The integrator holds no state between calls: given identical inputs and
/// an identical next draw from the variate source, the result is fully
/// determined.
///
/// # Examples
///
/// ```rust
/// use qnoise_core::{HeunIntegrator, NoiseRng};
///
/// let integrator = HeunIntegrator::new(1.0, 1.5, 100.0);
/// let mut rng = NoiseRng::from_seed(42);
///
/// let mut x = 0.0;
/// for _ in 0..1000 {
///     x = integrator.step(x, &mut rng);
/// }
/// assert!(x.is_finite());
/// ```
#[derive(Clone, Debug)]
pub struct HeunIntegrator {
    /// Correlation time of the process.
    tau: f64,
    /// Integration step, `1/H`.
    dt: f64,
    /// Cached `sqrt(H)`.
    sqrt_h: f64,
    /// Noise term scale per step, `1/(tau*sqrt(H))`.
    noise_scale: f64,
    /// Drift branch, selected once from `q`.
    drift: Drift,
    /// Stationary support half-width for `q < 1`.
    cut: Option<f64>,
}

impl HeunIntegrator {
    /// Creates an integrator context for one series.
    ///
    /// # Arguments
    ///
    /// * `tau` - correlation time of the process
    /// * `q` - shape parameter; `q == 1.0` (exact equality) selects the
    ///   linear Ornstein-Uhlenbeck drift branch
    /// * `resolution` - sampling resolution `H` in steps per unit time; the
    ///   integration step is `dt = 1/H`
    ///
    /// # Preconditions
    ///
    /// `tau > 0`, `resolution > 0` and both finite, `q` finite. Violations
    /// are a contract breach by the caller, checked only in debug builds.
    pub fn new(tau: f64, q: f64, resolution: f64) -> Self {
        debug_assert!(tau > 0.0 && tau.is_finite());
        debug_assert!(resolution > 0.0 && resolution.is_finite());
        debug_assert!(q.is_finite());

        let sqrt_h = resolution.sqrt();
        let drift = Drift::for_q(q);
        Self {
            tau,
            dt: 1.0 / resolution,
            sqrt_h,
            noise_scale: 1.0 / (tau * sqrt_h),
            drift,
            cut: drift.support_cut(tau),
        }
    }

    /// Correlation time this context was built for.
    #[inline]
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Integration step `dt = 1/H`.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Cached square root of the sampling resolution.
    #[inline]
    pub fn sqrt_h(&self) -> f64 {
        self.sqrt_h
    }

    /// Drift branch selected for this series.
    #[inline]
    pub fn drift(&self) -> Drift {
        self.drift
    }

    /// Support half-width for the bounded regime, `None` for `q >= 1`.
    #[inline]
    pub fn support_cut(&self) -> Option<f64> {
        self.cut
    }

    /// Advances the process by one time step.
    ///
    /// Consumes exactly one Gaussian variate from `rng`, no more, no fewer.
    /// Determinism under a fixed seed depends on this exact consumption
    /// count, including for steps that reflect or restart in the bounded
    /// regime.
    ///
    /// # Arguments
    ///
    /// * `x` - current process value
    /// * `rng` - variate source owned by this series
    ///
    /// # Returns
    ///
    /// The next process value. Finite for all valid parameters; confined to
    /// the open support for `q < 1`.
    ///
    /// # Preconditions
    ///
    /// `x` is finite, and lies inside the open support when `q < 1`.
    pub fn step(&self, x: f64, rng: &mut NoiseRng) -> f64 {
        debug_assert!(x.is_finite());
        if let Some(cut) = self.cut {
            debug_assert!(x.abs() < cut);
        }

        let noise = self.noise_scale * rng.gen_normal();
        let f0 = self.drift.eval(x, self.tau);
        let predictor = x + f0 * self.dt + noise;

        let candidate = match self.cut {
            // The drift formula is meaningless outside the support; degrade
            // an escaped predictor to its Euler value for this step.
            Some(cut) if !(predictor.abs() < cut) => predictor,
            _ => {
                let f1 = self.drift.eval(predictor, self.tau);
                x + 0.5 * self.dt * (f0 + f1) + noise
            }
        };

        match self.cut {
            Some(cut) => confine(candidate, cut),
            None => candidate,
        }
    }
}

/// Maps a candidate value back into the open support `(-cut, cut)`.
///
/// Reflects about the violated boundary. An overshoot too large to reflect
/// restarts from the support centre: holding the old value instead can lock
/// the trajectory against the boundary, where the drift is singular and
/// every subsequent proposal overshoots again. Draw-free either way, so the
/// one-variate-per-step contract survives boundary events.
fn confine(candidate: f64, cut: f64) -> f64 {
    if candidate.abs() < cut {
        return candidate;
    }
    let reflected = candidate.signum() * (2.0 * cut - candidate.abs());
    if reflected.abs() < cut {
        reflected
    } else {
        0.0
    }
}
