use clap::Parser;
use log::LevelFilter;

use crate::error::BenchError;

/// Default window length
pub const DEFAULT_WINDOW_LENGTH: usize = 500;
/// Default number of generated samples
pub const DEFAULT_NUM_SAMPLES: usize = 10_000_000;
/// Default number of sine periods over the whole stream
pub const DEFAULT_CYCLES: f32 = 4.0;

#[derive(Debug, Parser)]
#[command(
    name = "sma-bench",
    version,
    about = "Compare four simple moving average strategies for speed and accuracy",
    long_about = "Feeds a noisy sine wave through four moving average variants and reports\n\
        how long each took and how far variants 2-4 strayed from the full recompute.\n\n\
        Per-sample data goes to stdout, timings and errors go to stderr.\n\n\
        EXAMPLES:\n\
        \n  sma-bench --no-data                      Timings only\n\
        \n  sma-bench -w 64 -n 1000 --seed 7         Small reproducible run"
)]
pub struct Cli {
    /// Window length
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_LENGTH)]
    window: usize,

    /// Number of samples to generate
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_SAMPLES)]
    samples: usize,

    /// Seed for the noise generator, drawn from the OS when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sine periods across the stream
    #[arg(long, default_value_t = DEFAULT_CYCLES)]
    cycles: f32,

    /// Skip the per-sample dump on stdout
    #[arg(long)]
    no_data: bool,

    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Validated benchmark settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub window_length: usize,
    pub num_samples: usize,
    pub seed: Option<u64>,
    pub cycles: f32,
    pub emit_data: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            window_length: DEFAULT_WINDOW_LENGTH,
            num_samples: DEFAULT_NUM_SAMPLES,
            seed: None,
            cycles: DEFAULT_CYCLES,
            emit_data: true,
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

impl TryFrom<&Cli> for BenchConfig {
    type Error = BenchError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if cli.window == 0 {
            return Err(BenchError::InvalidWindow(cli.window));
        }
        if !cli.cycles.is_finite() {
            return Err(BenchError::InvalidCycles(cli.cycles));
        }

        Ok(Self {
            window_length: cli.window,
            num_samples: cli.samples,
            seed: cli.seed,
            cycles: cli.cycles,
            emit_data: !cli.no_data,
        })
    }
}
