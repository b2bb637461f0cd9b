//! The shared paint style table and pre-computed text styles.
//!
//! # Shared Style Records
//!
//! All 768 grid cells render from exactly two [`PaintStyle`] records, owned
//! here and addressed by [`StyleId`]. A palette change mutates the two
//! records in place and is visible through every cell on the next repaint;
//! no cell carries its own copy of color state. This shared-reference
//! fan-out is intentional and load-bearing: the per-tick work is O(1) in
//! grid size because only the two records are touched.
//!
//! # Static Text Styles
//!
//! The counter label's text styles are `const`, computed at compile time in
//! the binary's read-only data section, so no style structs are rebuilt per
//! repaint.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::{BLUE, CYAN, RED, WHITE, YELLOW};
use crate::phase::TogglePhase;

// =============================================================================
// Paint Styles
// =============================================================================

/// Identity of one of the two live paint styles.
///
/// Grid cells store a `StyleId`, never a color: resolving the fill happens
/// at draw time through [`StyleSet::fill`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StyleId {
    /// The blue/red style. Cells where `row + col` is even.
    A,
    /// The yellow/cyan style. Cells where `row + col` is odd.
    B,
}

/// A mutable record of visual attributes shared by many display objects.
///
/// Exactly two instances exist for the program's lifetime, inside
/// [`StyleSet`]. They are mutated in place on every toggle and never
/// recreated.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PaintStyle {
    /// Current fill color of every cell referencing this style.
    pub fill: Rgb565,
}

/// The two named paint styles, owned by the panel controller.
#[derive(Debug)]
pub struct StyleSet {
    style_a: PaintStyle,
    style_b: PaintStyle,
}

impl StyleSet {
    /// Create the style table with the post-build (even phase) palette.
    pub const fn new() -> Self {
        Self {
            style_a: PaintStyle { fill: BLUE },
            style_b: PaintStyle { fill: YELLOW },
        }
    }

    /// Set both fills for the given phase.
    ///
    /// Even: blue/yellow checkerboard. Odd: red/cyan. Pure in-memory
    /// mutation; every referencing cell renders with the new colors on the
    /// next repaint.
    pub fn apply_palette(
        &mut self,
        phase: TogglePhase,
    ) {
        match phase {
            TogglePhase::Even => {
                self.style_a.fill = BLUE;
                self.style_b.fill = YELLOW;
            }
            TogglePhase::Odd => {
                self.style_a.fill = RED;
                self.style_b.fill = CYAN;
            }
        }
    }

    /// Resolve the current fill color for a style id.
    #[inline]
    pub const fn fill(
        &self,
        id: StyleId,
    ) -> Rgb565 {
        match id {
            StyleId::A => self.style_a.fill,
            StyleId::B => self.style_b.fill,
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Pre-computed Text Styles (const - zero runtime cost)
// =============================================================================

/// Large white text for the update counter (`ProFont` 24pt).
pub const COUNTER_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Bottom-left anchored text. Used for the counter label in the screen
/// corner.
pub const BOTTOM_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Bottom)
    .build();

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_build_palette() {
        let styles = StyleSet::new();
        assert_eq!(styles.fill(StyleId::A), BLUE);
        assert_eq!(styles.fill(StyleId::B), YELLOW);
    }

    #[test]
    fn test_odd_palette() {
        let mut styles = StyleSet::new();
        styles.apply_palette(TogglePhase::Odd);
        assert_eq!(styles.fill(StyleId::A), RED);
        assert_eq!(styles.fill(StyleId::B), CYAN);
    }

    #[test]
    fn test_even_palette_matches_post_build() {
        let mut styles = StyleSet::new();
        styles.apply_palette(TogglePhase::Odd);
        styles.apply_palette(TogglePhase::Even);
        assert_eq!(styles.fill(StyleId::A), BLUE);
        assert_eq!(styles.fill(StyleId::B), YELLOW);
    }

    #[test]
    fn test_shared_mutation_fans_out() {
        // Two cells referencing the same id must observe one mutation.
        let mut styles = StyleSet::new();
        let cell_1 = StyleId::A;
        let cell_2 = StyleId::A;
        styles.apply_palette(TogglePhase::Odd);
        assert_eq!(styles.fill(cell_1), RED);
        assert_eq!(styles.fill(cell_2), RED);
    }
}
