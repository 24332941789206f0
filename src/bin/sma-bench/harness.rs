use std::{
    fmt,
    io::Write,
    time::{Duration, Instant},
};

use log::debug;
use sliding_sma::{MovingAverage, SmaKind, SmaVisitor, helper::max_abs_error};

use crate::error::BenchError;

/// Timing and accuracy of one variant over the whole stream.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantReport {
    pub kind: SmaKind,
    pub elapsed: Duration,
    /// Maximum absolute difference from the reference, `None` for the reference itself
    pub max_abs_error: Option<f32>,
}

impl fmt::Display for VariantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} milliseconds.", self.kind, self.elapsed.as_millis())?;
        if let Some(err) = self.max_abs_error {
            write!(f, " max absolute error: {err}")?;
        }
        Ok(())
    }
}

/// Outputs of every variant, in `SmaKind::ALL` order.
#[derive(Debug)]
pub struct BenchOutcome {
    pub outputs: Vec<Vec<f32>>,
    pub reports: Vec<VariantReport>,
}

/// Feeds the whole input through one variant, timing only the update loop.
struct Drive<'a>(&'a [f32]);

impl SmaVisitor<f32> for Drive<'_> {
    type Output = (Duration, Vec<f32>);

    fn visit<S>(self, mut sma: S) -> Self::Output
    where
        S: MovingAverage<f32> + 'static,
    {
        let input = self.0;
        let mut output = Vec::with_capacity(input.len());
        let start = Instant::now();
        for &v in input {
            output.push(sma.next(v));
        }
        (start.elapsed(), output)
    }
}

/// Runs one variant over `input`.
///
/// Variants are driven through their concrete types so the timed loop is
/// free of dynamic dispatch.
pub fn run_variant(kind: SmaKind, window_length: usize, input: &[f32]) -> (Duration, Vec<f32>) {
    kind.visit(window_length, Drive(input))
}

/// Runs every variant in turn, writing each report line to `diag` as soon as
/// the variant finishes.
pub fn run_all<W: Write>(
    window_length: usize,
    input: &[f32],
    diag: &mut W,
) -> Result<BenchOutcome, BenchError> {
    let mut outputs: Vec<Vec<f32>> = Vec::with_capacity(SmaKind::ALL.len());
    let mut reports = Vec::with_capacity(SmaKind::ALL.len());

    for kind in SmaKind::ALL {
        let (elapsed, output) = run_variant(kind, window_length, input);
        let error = match outputs.first() {
            Some(reference) if !kind.is_reference() => {
                Some(max_abs_error(reference, &output).unwrap_or(0.0))
            }
            _ => None,
        };
        debug!("{kind} ({}) finished {} samples", kind.label(), input.len());

        let report = VariantReport {
            kind,
            elapsed,
            max_abs_error: error,
        };
        writeln!(diag, "{report}").map_err(BenchError::io("diagnostic"))?;
        reports.push(report);
        outputs.push(output);
    }

    Ok(BenchOutcome { outputs, reports })
}

/// Writes one line per sample: the input followed by each variant's output.
pub fn write_data<W: Write>(
    out: &mut W,
    input: &[f32],
    outputs: &[Vec<f32>],
) -> Result<(), BenchError> {
    let io = BenchError::io;
    for (i, v) in input.iter().enumerate() {
        write!(out, "{v}").map_err(io("data"))?;
        for output in outputs {
            write!(out, " {}", output[i]).map_err(io("data"))?;
        }
        writeln!(out).map_err(io("data"))?;
    }
    out.flush().map_err(io("data"))
}
