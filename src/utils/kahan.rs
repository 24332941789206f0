use core::ops::{AddAssign, SubAssign};

use num_traits::Float;

/// Kahan compensated summation.
///
/// Keeps a running `sum` and a `correction` holding the low-order bits lost
/// by the last addition. The correction is folded into the next increment, so
/// the error of a long sequence of additions stays bounded instead of growing
/// with the number of terms.
///
/// Subtraction is accumulation of the negated value, which lets a sliding
/// window remove its expiring sample from the same accumulator.
///
/// Non-finite inputs are not special-cased and propagate per IEEE-754.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kahan<T> {
    /// Naive running total
    sum: T,
    /// Rounding error of the last step, subtracted from the next increment
    correction: T,
}

impl<T: Float> Default for Kahan<T> {
    fn default() -> Self {
        Self::new(T::zero())
    }
}

impl<T: Float> Kahan<T> {
    /// Creates an accumulator starting at `initial` with no pending correction.
    #[inline]
    pub fn new(initial: T) -> Self {
        Self {
            sum: initial,
            correction: T::zero(),
        }
    }

    /// Adds `value` to the running total and returns the new total.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to add, negate it to subtract
    ///
    /// # Returns
    ///
    /// * `T` - The compensated running total
    #[inline]
    pub fn accumulate(&mut self, value: T) -> T {
        let y = value - self.correction;
        let t = self.sum + y;
        self.correction = (t - self.sum) - y;
        self.sum = t;
        self.sum
    }

    /// Returns the current total
    #[inline]
    pub fn total(&self) -> T {
        self.sum
    }

    /// Returns the pending correction term
    #[inline]
    pub fn correction(&self) -> T {
        self.correction
    }

    /// Resets the accumulator to zero
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl<T: Float> AddAssign<T> for Kahan<T> {
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.accumulate(rhs);
    }
}

impl<T: Float> SubAssign<T> for Kahan<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.accumulate(-rhs);
    }
}

impl<T: Float> Extend<T> for Kahan<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for v in iter {
            self.accumulate(v);
        }
    }
}

/// Sums a finite sequence with Kahan compensation, starting from zero.
///
/// # Arguments
///
/// * `values` - The values to sum
///
/// # Returns
///
/// * `T` - The compensated total, zero for an empty sequence
#[inline]
pub fn kahan_sum<T, I>(values: I) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let mut acc = Kahan::default();
    acc.extend(values);
    acc.total()
}
