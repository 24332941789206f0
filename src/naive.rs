use num_traits::Float;

use crate::{MovingAverage, Window, helper::period_as};

/// Moving average over a plain running sum.
///
/// `O(1)` per sample: the expiring value is subtracted and the new one added
/// in a single step. Rounding errors are never corrected and compound over
/// long streams, most visibly after a large sample leaves the window.
#[derive(Debug, Clone)]
pub struct NaiveSma<T> {
    /// Ring buffer holding the window
    buf: Window<T>,
    /// Running sum of the window
    sum: T,
    /// Window length as `T`
    divisor: T,
}

impl<T: Float + Default> NaiveSma<T> {
    /// Creates a new `NaiveSma` with the specified period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self {
            buf: Window::new(period),
            sum: T::zero(),
            divisor: period_as(period),
        }
    }

    /// Returns the running sum of the window
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }
}

impl<T: Float + Default> MovingAverage<T> for NaiveSma<T> {
    #[inline]
    fn next(&mut self, value: T) -> T {
        let expired = self.buf.next(value);
        self.sum = self.sum + (value - expired);
        self.sum / self.divisor
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
        self.sum = T::zero();
    }
}
