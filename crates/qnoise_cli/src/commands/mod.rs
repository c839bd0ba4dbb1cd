//! CLI command implementations.

pub mod generate;
pub mod ou;
pub mod white;

use qnoise_core::{Seed, Transient};

/// Maps the optional `--seed` flag to a seeding strategy.
pub(crate) fn seed_from_flag(seed: Option<u64>) -> Seed {
    match seed {
        Some(value) => Seed::Manual(value),
        None => Seed::Auto,
    }
}

/// Maps the optional `--transient` flag to a discard policy.
pub(crate) fn transient_from_flag(transient: Option<usize>) -> Transient {
    match transient {
        Some(steps) => Transient::Fixed(steps),
        None => Transient::Auto,
    }
}
