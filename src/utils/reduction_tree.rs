use alloc::boxed::Box;

use num_traits::Float;

/// A pairwise reduction tree over a fixed number of leaves.
///
/// Slots are indexed from 1 in an array of `2 * len` entries (slot 0 is
/// unused). Leaves live in `[len, 2 * len)` and internal slot `k` holds
/// `slot[2k] + slot[2k + 1]`, so slot 1 is always the total of every leaf.
///
/// The layout is a single binary tree for any `len >= 1`, not only powers of
/// two: each slot `i` in `[2, 2 * len)` has exactly one parent `i / 2`, which
/// lies in `[1, len)`, and each internal slot has both children below
/// `2 * len`. For non power-of-two lengths the leaves simply sit on two
/// adjacent depths. With `len == 1` the only leaf is the root.
///
/// Updating one leaf rebuilds only its ancestors, `O(log len)` additions.
#[derive(Debug, Clone)]
pub struct ReductionTree<T> {
    /// Slot 0 unused, internal nodes in `[1, len)`, leaves in `[len, 2 * len)`
    slots: Box<[T]>,
    /// Number of leaves
    len: usize,
}

impl<T: Float> ReductionTree<T> {
    /// Creates a tree of `len` zero leaves.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "period can not be zero");

        Self {
            slots: vec![T::zero(); 2 * len].into_boxed_slice(),
            len,
        }
    }

    /// Returns the number of leaves
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Writes `value` into leaf `index` and refreshes the path to the root.
    ///
    /// # Arguments
    ///
    /// * `index` - The leaf to overwrite, `0 <= index < len`
    /// * `value` - The new leaf value
    ///
    /// # Returns
    ///
    /// * `T` - The new total held at the root
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> T {
        let mut node = index + self.len;
        self.slots[node] = value;

        // Siblings share every bit but the lowest; the even one is the left child.
        while node != 1 {
            let left = node & !1;
            let right = left + 1;
            node = left / 2;
            self.slots[node] = self.slots[left] + self.slots[right];
        }
        self.slots[1]
    }

    /// Returns the sum of all leaves
    #[inline]
    pub fn total(&self) -> T {
        self.slots[1]
    }

    /// Returns the leaves in index order
    #[inline]
    pub fn leaves(&self) -> &[T] {
        &self.slots[self.len..]
    }

    /// Returns the raw slot array, slot 0 included
    #[inline]
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// Zeroes every slot
    pub fn reset(&mut self) {
        self.slots.fill(T::zero());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(tree: &ReductionTree<f64>) {
        let slots = tree.slots();
        for k in 1..tree.len() {
            assert_eq!(slots[k], slots[2 * k] + slots[2 * k + 1], "slot {k}");
        }
    }

    #[test]
    fn root_tracks_total_power_of_two() {
        let mut tree = ReductionTree::new(4);
        assert_eq!(tree.set(0, 1.0), 1.0);
        assert_eq!(tree.set(1, 2.0), 3.0);
        assert_eq!(tree.set(2, 3.0), 6.0);
        assert_eq!(tree.set(3, 4.0), 10.0);
        assert_eq!(tree.set(0, 5.0), 14.0);
        assert_eq!(tree.leaves(), &[5.0, 2.0, 3.0, 4.0]);
        assert_consistent(&tree);
    }

    #[test]
    fn root_tracks_total_odd_length() {
        for len in [3, 5, 6, 7, 11] {
            let mut tree = ReductionTree::new(len);
            let mut expected = vec![0.0; len];
            for step in 0..3 * len {
                let index = (step * 7) % len;
                let value = step as f64 + 0.5;
                expected[index] = value;
                let total = tree.set(index, value);
                assert_eq!(total, expected.iter().sum::<f64>(), "len {len} step {step}");
                assert_consistent(&tree);
            }
        }
    }

    #[test]
    fn single_leaf_is_root() {
        let mut tree = ReductionTree::new(1);
        assert_eq!(tree.set(0, 7.5), 7.5);
        assert_eq!(tree.set(0, -2.0), -2.0);
        assert_eq!(tree.slots(), &[0.0, -2.0]);
    }

    #[test]
    fn reset_zeroes_every_slot() {
        let mut tree = ReductionTree::new(3);
        tree.set(2, 9.0);
        assert_eq!(tree.leaves(), &[0.0, 0.0, 9.0]);
        tree.reset();
        assert_eq!(tree.total(), 0.0);
        assert!(tree.slots().iter().all(|&s| s == 0.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn set_past_last_leaf_panics() {
        let mut tree = ReductionTree::new(3);
        tree.set(3, 1.0);
    }

    #[test]
    #[should_panic(expected = "period can not be zero")]
    fn zero_length_panics() {
        let _ = ReductionTree::<f32>::new(0);
    }
}
