//! Randomness boundary trait for testability
//!
//! The simulation draws offsets through this trait, allowing tests to
//! inject seeded or scripted sources instead of OS entropy.

/// Source of per-axis walk offsets.
pub trait OffsetSource {
    /// Next offset, one of `-1`, `0`, `1`.
    fn next_offset(&mut self) -> i64;
}

impl<T: OffsetSource + ?Sized> OffsetSource for &mut T {
    fn next_offset(&mut self) -> i64 {
        (**self).next_offset()
    }
}

impl<T: OffsetSource + ?Sized> OffsetSource for Box<T> {
    fn next_offset(&mut self) -> i64 {
        (**self).next_offset()
    }
}
