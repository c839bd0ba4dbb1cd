//! `qnoise ou` - colored Gaussian (Ornstein-Uhlenbeck) noise series.

use qnoise_core::{NoiseKind, SeriesConfig, SeriesGenerator};
use tracing::info;

use crate::output::{write_samples, Destination};
use crate::Result;

use super::{seed_from_flag, transient_from_flag};

/// Runs the ou command.
pub fn run(
    tau: f64,
    resolution: f64,
    samples: usize,
    seed: Option<u64>,
    transient: Option<usize>,
    output: Option<&str>,
) -> Result<()> {
    let config = SeriesConfig::builder()
        .kind(NoiseKind::OrnsteinUhlenbeck)
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
        format!("ou_{}_{}_{}.txt", tau, resolution, samples),
    );
    write_samples(&series, &destination)?;

    info!(
        samples = series.len(),
        seed = generator.seed(),
        destination = destination.describe(),
        "wrote Ornstein-Uhlenbeck series"
    );
    Ok(())
}
