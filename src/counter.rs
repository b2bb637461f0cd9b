//! The monotonic update counter and its label text.
//!
//! The counter starts at 0, gains exactly 1 per toggle pass, and is never
//! reset. Its textual form is re-derived after every toggle into a
//! `heapless::String`, so no heap allocation happens on the update path.

use core::fmt::Write;

use heapless::String;

/// Capacity of the counter label text buffer.
///
/// Generously sufficient for any `u32` value (10 digits).
pub const LABEL_CAPACITY: usize = 50;

/// Text buffer type for the counter label.
pub type LabelText = String<LABEL_CAPACITY>;

/// Number of completed toggle passes since build.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct UpdateCounter {
    value: u32,
}

impl UpdateCounter {
    /// Counter at 0, the post-build state.
    pub const fn new() -> Self { Self { value: 0 } }

    /// Add one completed toggle pass.
    #[inline]
    pub fn increment(&mut self) { self.value = self.value.wrapping_add(1); }

    /// Current count.
    #[inline]
    pub const fn value(self) -> u32 { self.value }

    /// Format the count as plain decimal text: no leading zeros, no
    /// separators.
    pub fn text(self) -> LabelText {
        let mut text = LabelText::new();
        // Capacity exceeds the widest u32, so the write cannot fail
        write!(text, "{}", self.value).ok();
        text
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero() {
        let counter = UpdateCounter::new();
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.text().as_str(), "0");
    }

    #[test]
    fn test_counter_increments_by_one() {
        let mut counter = UpdateCounter::new();
        for expected in 1..=10 {
            counter.increment();
            assert_eq!(counter.value(), expected);
        }
    }

    #[test]
    fn test_text_is_plain_decimal() {
        let mut counter = UpdateCounter::new();
        for _ in 0..42 {
            counter.increment();
        }
        assert_eq!(counter.text().as_str(), "42");
    }

    #[test]
    fn test_text_no_separators_for_large_values() {
        let mut counter = UpdateCounter::new();
        for _ in 0..1000 {
            counter.increment();
        }
        assert_eq!(counter.text().as_str(), "1000");
    }

    #[test]
    fn test_text_fits_max_value() {
        let mut counter = UpdateCounter::new();
        counter.value = u32::MAX;
        assert_eq!(counter.text().as_str(), "4294967295");
    }
}
