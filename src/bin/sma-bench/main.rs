use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

mod config;
mod error;
mod harness;
mod signal;

use config::{BenchConfig, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = BenchConfig::try_from(&cli)?;
    debug!("{config:?}");

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "generating {} samples, seed {seed}, window {}",
        config.num_samples, config.window_length
    );
    let input = signal::generate(config.num_samples, config.cycles, seed);

    let outcome = harness::run_all(config.window_length, &input, &mut io::stderr().lock())
        .context("benchmark run failed")?;
    debug!("{} variants measured", outcome.reports.len());

    if config.emit_data {
        let mut out = BufWriter::new(io::stdout().lock());
        harness::write_data(&mut out, &input, &outcome.outputs)
            .context("failed to dump per-sample data")?;
    }

    Ok(())
}
