use num_traits::Float;

use crate::{MovingAverage, Window, helper::period_as, kahan_sum};

/// Moving average that resums the whole window on every sample.
///
/// Each update is `O(N)`, but no error carries over from one sample to the
/// next: the output only depends on the values currently in the window. The
/// sum uses Kahan compensation, which makes this the accuracy reference the
/// incremental variants are measured against.
#[derive(Debug, Clone)]
pub struct FullRecomputeSma<T> {
    /// Ring buffer holding the window
    buf: Window<T>,
    /// Window length as `T`
    divisor: T,
}

impl<T: Float + Default> FullRecomputeSma<T> {
    /// Creates a new `FullRecomputeSma` with the specified period.
    ///
    /// # Arguments
    ///
    /// * `period` - The window length
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self {
            buf: Window::new(period),
            divisor: period_as(period),
        }
    }

    /// Returns the window contents in storage order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }
}

impl<T: Float + Default> MovingAverage<T> for FullRecomputeSma<T> {
    #[inline]
    fn next(&mut self, value: T) -> T {
        self.buf.next(value);
        kahan_sum(self.buf.as_slice().iter().copied()) / self.divisor
    }

    #[inline]
    fn period(&self) -> usize {
        self.buf.period()
    }

    #[inline]
    fn count(&self) -> usize {
        self.buf.len()
    }

    fn reset(&mut self) {
        self.buf.reset();
    }
}
