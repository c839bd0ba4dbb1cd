//! `qnoise generate` - q-generalized colored noise series.

use qnoise_core::{NoiseKind, SeriesConfig, SeriesGenerator};
use tracing::info;

use crate::output::{write_samples, Destination};
use crate::Result;

use super::{seed_from_flag, transient_from_flag};

/// Runs the generate command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    tau: f64,
    resolution: f64,
    q: f64,
    samples: usize,
    seed: Option<u64>,
    transient: Option<usize>,
    normalised: bool,
    output: Option<&str>,
) -> Result<()> {
    let kind = if normalised {
        NoiseKind::QNoiseNormalised { q }
    } else {
        NoiseKind::QNoise { q }
    };

    let config = SeriesConfig::builder()
        .kind(kind)
        .tau(tau)
        .resolution(resolution)
        .n_samples(samples)
        .seed(seed_from_flag(seed))
        .transient(transient_from_flag(transient))
        .build()?;

    let mut generator = SeriesGenerator::new(config);
    let series = generator.generate();

    let destination = Destination::resolve(
        output,
        format!("qnoise_{}_{}_{}_{}.txt", tau, resolution, q, samples),
    );
    write_samples(&series, &destination)?;

    info!(
        samples = series.len(),
        seed = generator.seed(),
        destination = destination.describe(),
        "wrote q-noise series"
    );
    Ok(())
}
