//! Sample output writing.
//!
//! The only persisted artifact is a plain-text list of floating-point
//! samples, one per line, in generation order.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::Result;

/// Where a generated series goes.
pub enum Destination {
    /// Standard output (requested with `-o -`).
    Stdout,
    /// A file path.
    File(String),
}

impl Destination {
    /// Resolves the user's `--output` choice against a default filename.
    pub fn resolve(output: Option<&str>, default_name: String) -> Self {
        match output {
            Some("-") => Destination::Stdout,
            Some(path) => Destination::File(path.to_string()),
            None => Destination::File(default_name),
        }
    }

    /// Human-readable label for logging.
    pub fn describe(&self) -> &str {
        match self {
            Destination::Stdout => "<stdout>",
            Destination::File(path) => path,
        }
    }
}

/// Writes samples newline-delimited to the destination.
pub fn write_samples(samples: &[f64], destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let stdout = io::stdout();
            write_to(samples, stdout.lock())
        }
        Destination::File(path) => {
            let file = File::create(Path::new(path))?;
            write_to(samples, file)
        }
    }
}

fn write_to(samples: &[f64], writer: impl Write) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for sample in samples {
        writeln!(writer, "{}", sample)?;
    }
    writer.flush()?;
    Ok(())
}
