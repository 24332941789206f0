//! Helpers for comparing output streams of the moving average variants.

use num_traits::Float;
use ordered_float::{OrderedFloat, PrimitiveFloat};

/// Returns the largest absolute difference between two output streams
///
/// Pairs are compared position by position up to the shorter stream. A NaN
/// difference orders above every number, so a diverged stream is reported as
/// NaN rather than hidden.
///
/// # Arguments
///
/// * `reference` - The reference output
/// * `candidate` - The output to compare against the reference
///
/// # Returns
///
/// * `Option<T>` - The maximum absolute error, or `None` if either stream is empty
#[inline]
pub fn max_abs_error<T>(reference: &[T], candidate: &[T]) -> Option<T>
where
    T: Float + PrimitiveFloat,
{
    reference
        .iter()
        .zip(candidate)
        .map(|(&r, &c)| OrderedFloat(Float::abs(r - c)))
        .max()
        .map(|e| e.0)
}

/// Returns `period` as `T`
///
/// Every float can approximate any `usize`; the NaN fallback is unreachable
/// for the primitive float types.
#[inline]
pub(crate) fn period_as<T: Float>(period: usize) -> T {
    T::from(period).unwrap_or_else(T::nan)
}
