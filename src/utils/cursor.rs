/// Write position into a fixed number of slots that wraps around.
///
/// Tracks which slot the next sample goes to and whether every slot has been
/// written at least once. Shared by [`Window`](super::Window) and the tree
/// variant, whose leaves are filled in the same round-robin order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    /// Number of slots
    period: usize,
    /// The slot the next sample is written to
    pos: usize,
    /// Whether every slot has been written once
    full: bool,
}

impl Cursor {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub(crate) const fn new(period: usize) -> Self {
        assert!(period > 0, "period can not be zero");

        Self {
            period,
            pos: 0,
            full: false,
        }
    }

    /// Returns the slot to write and moves on to the next one.
    #[inline]
    pub(crate) const fn advance(&mut self) -> usize {
        let slot = self.pos;
        self.pos = (self.pos + 1) % self.period;
        if self.pos == 0 {
            self.full = true;
        }
        slot
    }

    /// Returns the number of slots written so far, saturating at the period.
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        if self.full { self.period } else { self.pos }
    }

    #[inline]
    pub(crate) const fn period(&self) -> usize {
        self.period
    }

    pub(crate) const fn reset(&mut self) {
        self.pos = 0;
        self.full = false;
    }
}
