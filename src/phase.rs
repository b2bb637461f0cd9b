//! The even/odd phase of the toggle cycle.
//!
//! The phase is stored as an explicit enum rather than re-derived from the
//! update counter at each use, so the transition function can be audited and
//! tested in isolation from the counter's textual formatting. The two stay
//! consistent: the phase is [`TogglePhase::Odd`] exactly when the counter is
//! odd.

/// Current phase of the period-2 toggle cycle.
///
/// The post-build state is `Even`; every toggle pass flips the phase
/// unconditionally.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum TogglePhase {
    /// Blue/yellow palette, glyph anchored top-center.
    #[default]
    Even,

    /// Red/cyan palette, glyph anchored bottom-center.
    Odd,
}

impl TogglePhase {
    /// Flip to the other phase. There is no guard and no skip; the cycle is
    /// driven purely by call count.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }

    /// Phase implied by an update count (count parity).
    #[inline]
    pub const fn from_count(count: u32) -> Self {
        if count % 2 == 0 { Self::Even } else { Self::Odd }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_default() {
        assert_eq!(TogglePhase::default(), TogglePhase::Even);
    }

    #[test]
    fn test_phase_next() {
        assert_eq!(TogglePhase::Even.next(), TogglePhase::Odd);
        assert_eq!(TogglePhase::Odd.next(), TogglePhase::Even);
    }

    #[test]
    fn test_phase_round_trip() {
        let phase = TogglePhase::Even;
        assert_eq!(phase.next().next(), phase);
    }

    #[test]
    fn test_phase_from_count() {
        assert_eq!(TogglePhase::from_count(0), TogglePhase::Even);
        assert_eq!(TogglePhase::from_count(1), TogglePhase::Odd);
        assert_eq!(TogglePhase::from_count(1000), TogglePhase::Even);
    }

    #[test]
    fn test_next_matches_count_parity() {
        let mut phase = TogglePhase::Even;
        for count in 1..=100u32 {
            phase = phase.next();
            assert_eq!(phase, TogglePhase::from_count(count));
        }
    }
}
