use alloc::boxed::Box;

use super::cursor::Cursor;

/// A fixed-size circular buffer holding the most recent `period` samples.
///
/// Every slot starts out as `T::default()`, so a window of floats is
/// zero-filled until it has seen `period` samples. Once full, each new
/// sample overwrites the oldest one.
#[derive(Debug, Clone)]
pub struct Window<T> {
    /// The buffer that stores the values
    buf: Box<[T]>,
    /// The slot the next sample is written to
    cursor: Cursor,
}

impl<T> Window<T> {
    /// Creates a new zero-filled window with the specified period
    ///
    /// # Panics
    ///
    /// Panics if `period` is zero.
    pub fn new(period: usize) -> Self
    where
        T: Default + Clone,
    {
        let cursor = Cursor::new(period);

        Self {
            buf: vec![T::default(); period].into_boxed_slice(),
            cursor,
        }
    }

    /// Clears the buffer, resetting its state.
    pub fn reset(&mut self)
    where
        T: Default + Copy,
    {
        self.buf.fill(T::default());
        self.cursor.reset();
    }

    /// Returns the number of samples pushed so far, saturating at the period.
    pub const fn len(&self) -> usize {
        self.cursor.len()
    }

    /// Returns the window period
    pub const fn period(&self) -> usize {
        self.cursor.period()
    }

    /// Pushes a new value into the window and returns the value that was evicted
    ///
    /// While the window is still filling, the evicted value is the zero the
    /// slot was initialised with.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to push into the window
    ///
    /// # Returns
    ///
    /// * `T` - The value that was evicted from the window
    pub fn next(&mut self, value: T) -> T {
        let slot = self.cursor.advance();
        core::mem::replace(&mut self.buf[slot], value)
    }

    /// Returns every slot of the buffer in storage order, zero-filled slots included.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_ref()
    }
}
