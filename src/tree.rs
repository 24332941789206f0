use num_traits::Float;

use crate::{MovingAverage, ReductionTree, helper::period_as, utils::Cursor};

/// Moving average over a pairwise reduction tree.
///
/// Each sample overwrites one leaf and rebuilds its `O(log N)` ancestors.
/// Every partial sum is recomputed from the current leaves, so the error is
/// bounded by `log2(N)` roundings and nothing compounds across samples.
#[derive(Debug, Clone)]
pub struct TreeSma<T> {
    /// Leaves are the window slots
    tree: ReductionTree<T>,
    /// The leaf the next sample is written to
    cursor: Cursor,
    /// Window length as `T`
    divisor: T,
}

impl<T: Float> TreeSma<T> {
    /// Creates a new `TreeSma` with the specified period.
    ///
    /// Any period is accepted, see [`ReductionTree`] for the layout used when
    /// it is not a power of two.
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self {
        Self {
            tree: ReductionTree::new(period),
            cursor: Cursor::new(period),
            divisor: period_as(period),
        }
    }

    /// Returns the underlying reduction tree
    #[inline]
    pub fn tree(&self) -> &ReductionTree<T> {
        &self.tree
    }
}

impl<T: Float> MovingAverage<T> for TreeSma<T> {
    #[inline]
    fn next(&mut self, value: T) -> T {
        let total = self.tree.set(self.cursor.advance(), value);
        total / self.divisor
    }

    #[inline]
    fn period(&self) -> usize {
        self.tree.len()
    }

    #[inline]
    fn count(&self) -> usize {
        self.cursor.len()
    }

    fn reset(&mut self) {
        self.tree.reset();
        self.cursor.reset();
    }
}
