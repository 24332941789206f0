use alloc::boxed::Box;
use core::fmt;

use num_traits::Float;

use crate::{CompensatedSma, FullRecomputeSma, NaiveSma, TreeSma};

/// A streaming simple moving average over a fixed-length window.
///
/// The window is zero-filled at construction, so until `period` samples have
/// been seen the output is the sum of the samples so far divided by `period`.
pub trait MovingAverage<T> {
    /// Pushes `value` into the window and returns the new average.
    fn next(&mut self, value: T) -> T;

    /// Returns the window length.
    fn period(&self) -> usize;

    /// Returns the number of samples in the window, saturating at the period.
    fn count(&self) -> usize;

    /// Restores the freshly constructed, zero-filled state.
    fn reset(&mut self);

    /// Returns true once the window has been filled at least once.
    fn is_ready(&self) -> bool {
        self.count() == self.period()
    }
}

/// Operation run against a concrete variant picked at runtime.
///
/// [`SmaKind::visit`] constructs the variant and hands it over by value, so
/// the visitor is monomorphised per variant and its hot loop stays free of
/// dynamic dispatch.
pub trait SmaVisitor<T> {
    /// Result of the visit
    type Output;

    /// Consumes a freshly constructed variant.
    fn visit<S>(self, sma: S) -> Self::Output
    where
        S: MovingAverage<T> + 'static;
}

struct Boxed;

impl<T: 'static> SmaVisitor<T> for Boxed {
    type Output = Box<dyn MovingAverage<T>>;

    fn visit<S>(self, sma: S) -> Self::Output
    where
        S: MovingAverage<T> + 'static,
    {
        Box::new(sma)
    }
}

/// The four update strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmaKind {
    /// Resum the whole window with Kahan summation on every sample, `O(N)`
    FullRecompute,
    /// Plain running sum, `O(1)`, drifts over long streams
    Naive,
    /// Kahan-compensated running sum, `O(1)`
    Compensated,
    /// Pairwise reduction tree, `O(log N)`
    Tree,
}

impl SmaKind {
    /// Every variant, reference first
    pub const ALL: [SmaKind; 4] = [
        SmaKind::FullRecompute,
        SmaKind::Naive,
        SmaKind::Compensated,
        SmaKind::Tree,
    ];

    /// Short name used in diagnostics, `sma1` through `sma4`
    pub const fn name(self) -> &'static str {
        match self {
            SmaKind::FullRecompute => "sma1",
            SmaKind::Naive => "sma2",
            SmaKind::Compensated => "sma3",
            SmaKind::Tree => "sma4",
        }
    }

    /// Human readable description of the strategy
    pub const fn label(self) -> &'static str {
        match self {
            SmaKind::FullRecompute => "full recompute",
            SmaKind::Naive => "naive incremental",
            SmaKind::Compensated => "compensated incremental",
            SmaKind::Tree => "reduction tree",
        }
    }

    /// Returns true for the variant the others are measured against
    pub const fn is_reference(self) -> bool {
        matches!(self, SmaKind::FullRecompute)
    }

    /// Constructs this variant with `period` and passes it to `visitor`.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn visit<T, V>(self, period: usize, visitor: V) -> V::Output
    where
        T: Float + Default + 'static,
        V: SmaVisitor<T>,
    {
        match self {
            SmaKind::FullRecompute => visitor.visit(FullRecomputeSma::new(period)),
            SmaKind::Naive => visitor.visit(NaiveSma::new(period)),
            SmaKind::Compensated => visitor.visit(CompensatedSma::new(period)),
            SmaKind::Tree => visitor.visit(TreeSma::new(period)),
        }
    }

    /// Builds a boxed instance of this variant.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn build<T>(self, period: usize) -> Box<dyn MovingAverage<T>>
    where
        T: Float + Default + 'static,
    {
        self.visit::<T, _>(period, Boxed)
    }
}

impl fmt::Display for SmaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
