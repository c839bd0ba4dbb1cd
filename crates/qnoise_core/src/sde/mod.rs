//! # Stochastic Integration
//!
//! The numerical core of the crate: the q-dependent drift of the governing
//! SDE, the stochastic Heun integrator that advances the colored noise
//! process, and the exact Ornstein-Uhlenbeck transition used for the
//! Gaussian reference process.
//!
//! The governing equation is
//!
//! ```text
//! dx = f(x; tau, q) dt + (1/tau) dW
//! ```
//!
//! where `f` is selected once per series by [`Drift::for_q`]: the linear
//! mean-reverting Ornstein-Uhlenbeck term at `q = 1`, a power-law
//! nonlinearity otherwise. Integration proceeds at a fixed step `dt = 1/H`
//! where `H` is the sampling resolution in steps per unit time.

pub mod drift;
pub mod heun;
pub mod ou;

// Public re-exports
pub use drift::Drift;
pub use heun::HeunIntegrator;
pub use ou::OuTransition;
