//! `qnoise white` - Gaussian white noise series.

use qnoise_core::{NoiseKind, SeriesConfig, SeriesGenerator};
use tracing::info;

use crate::output::{write_samples, Destination};
use crate::Result;

use super::seed_from_flag;

/// Runs the white command.
pub fn run(samples: usize, seed: Option<u64>, output: Option<&str>) -> Result<()> {
    let config = SeriesConfig::builder()
        .kind(NoiseKind::WhiteNoise)
        .n_samples(samples)
        .seed(seed_from_flag(seed))
        .build()?;

    let mut generator = SeriesGenerator::new(config);
    let series = generator.generate();

    let destination = Destination::resolve(output, format!("white_{}.txt", samples));
    write_samples(&series, &destination)?;

    info!(
        samples = series.len(),
        seed = generator.seed(),
        destination = destination.describe(),
        "wrote white noise series"
    );
    Ok(())
}
