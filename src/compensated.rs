use num_traits::Float;

use crate::{Kahan, MovingAverage, Window, helper::period_as};

/// Moving average over a Kahan-compensated running sum.
///
/// Same `O(1)` update as [`NaiveSma`](crate::NaiveSma), but the expiring
/// value is removed and the new value added through a [`Kahan`] accumulator,
/// which keeps the long-run drift close to a single rounding error.
#[derive(Debug, Clone)]
pub struct CompensatedSma<T> {
    /// Ring buffer holding the window
    buf: Window<T>,
    /// Compensated running sum of the window
    sum: Kahan<T>,
    /// Window length as `T`
    divisor: T,
}

impl<T: Float + Default> CompensatedSma<T> {
    /// Creates a new `CompensatedSma` with the specified period.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self {
            buf: Window::new(period),
            sum: Kahan::default(),
            divisor: period_as(period),
        }
    }

    /// Returns the compensated running sum of the window
    #[inline]
    pub fn sum(&self) -> T {
        self.sum.total()
    }

    /// Returns the pending correction of the running sum
    #[inline]
    pub fn correction(&self) -> T {
        self.sum.correction()
    }
}

impl<T: Float + Default> MovingAverage<T> for CompensatedSma<T> {
    #[inline]
    fn next(&mut self, value: T) -> T {
        let expired = self.buf.next(value);
        self.sum -= expired;
        self.sum.accumulate(value) / self.divisor
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
        self.sum.reset();
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;
    use crate::NaiveSma;

    #[test]
    fn warm_up_divides_by_period() {
        let mut sma = CompensatedSma::new(4);
        let results: alloc::vec::Vec<f64> = (1..=6).map(|i| sma.next(i as f64)).collect();
        assert_eq!(results, vec![0.25, 0.75, 1.5, 2.5, 3.5, 4.5]);
        assert_eq!(sma.sum(), 18.0);
        assert_eq!(sma.correction(), 0.0);
    }

    #[test]
    fn constant_input_converges() {
        let mut sma = CompensatedSma::new(9);
        for _ in 0..30 {
            sma.next(0.7_f32);
        }
        assert_approx_eq!(sma.next(0.7), 0.7_f32, f32::EPSILON);
    }

    #[test]
    fn period_one_is_identity() {
        let mut sma = CompensatedSma::new(1);
        for v in [0.125_f64, -8.0, 3.5, 0.0] {
            assert_eq!(sma.next(v), v);
        }
    }

    #[test]
    fn drifts_less_than_naive_sum() {
        let period = 16;
        let mut rng = StdRng::seed_from_u64(7);
        let mut naive = NaiveSma::new(period);
        let mut compensated = CompensatedSma::new(period);
        let mut exact = Window::<f64>::new(period);

        let mut naive_err = 0.0_f64;
        let mut compensated_err = 0.0_f64;
        for _ in 0..1_000_000 {
            let v = rng.gen_range(0.0_f32..1.0);
            exact.next(v as f64);
            let expected = exact.as_slice().iter().sum::<f64>() / period as f64;

            naive_err = naive_err.max((naive.next(v) as f64 - expected).abs());
            compensated_err = compensated_err.max((compensated.next(v) as f64 - expected).abs());
        }

        assert!(compensated_err < naive_err);
        assert!(compensated_err < 1e-5, "compensated drift {compensated_err}");
    }

    #[test]
    fn reset_clears_sum() {
        let mut sma = CompensatedSma::new(2);
        sma.next(5.0);
        sma.next(1e-20);
        sma.reset();
        assert_eq!(sma.sum(), 0.0);
        assert_eq!(sma.correction(), 0.0);
        assert_eq!(sma.next(1.0), 0.5);
    }
}
