//! The zig-zag polyline glyph and its two anchor positions.
//!
//! The glyph is a wide letter "W": five points alternating peak and valley,
//! spanning 235x65 pixels. The point geometry is fixed at creation; every
//! toggle only repositions the same object between the top-center and
//! bottom-center of the screen, with a fixed margin from the anchored edge.

use embedded_graphics::prelude::*;

use crate::config::{GLYPH_EDGE_MARGIN, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::phase::TogglePhase;

/// The five fixed points of the letter "W", in glyph-local coordinates.
pub const GLYPH_POINTS: [Point; 5] = [
    Point::new(5, 5),
    Point::new(70, 70),
    Point::new(120, 10),
    Point::new(180, 60),
    Point::new(240, 10),
];

/// Stroke width of the glyph polyline in pixels.
pub const GLYPH_LINE_WIDTH: u32 = 5;

/// Named relative position for placing the glyph without absolute
/// coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum GlyphAnchor {
    /// Horizontally centered, [`GLYPH_EDGE_MARGIN`] below the top edge.
    #[default]
    TopMid,
    /// Horizontally centered, [`GLYPH_EDGE_MARGIN`] above the bottom edge.
    BottomMid,
}

impl GlyphAnchor {
    /// Anchor used in the given toggle phase.
    #[inline]
    pub const fn for_phase(phase: TogglePhase) -> Self {
        match phase {
            TogglePhase::Even => Self::TopMid,
            TogglePhase::Odd => Self::BottomMid,
        }
    }
}

/// The polyline glyph. Geometry is fixed; only the anchor changes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyph {
    anchor: GlyphAnchor,
}

impl Glyph {
    /// Glyph in its post-build position (top-center).
    pub const fn new() -> Self {
        Self {
            anchor: GlyphAnchor::TopMid,
        }
    }

    /// Reposition the glyph. Does not recreate the object or its points.
    #[inline]
    pub fn set_anchor(
        &mut self,
        anchor: GlyphAnchor,
    ) {
        self.anchor = anchor;
    }

    /// Current anchor.
    #[inline]
    pub const fn anchor(&self) -> GlyphAnchor { self.anchor }

    /// The fixed points translated to their on-screen position for the
    /// current anchor.
    pub fn anchored_points(&self) -> [Point; 5] {
        let offset = anchor_translation(self.anchor);
        GLYPH_POINTS.map(|p| p + offset)
    }
}

impl Default for Glyph {
    fn default() -> Self { Self::new() }
}

/// Translation that places the glyph's bounding box at the anchor position.
fn anchor_translation(anchor: GlyphAnchor) -> Point {
    let (min, max) = bounding_box();
    let span_x = max.x - min.x;
    let span_y = max.y - min.y;

    let left = (SCREEN_WIDTH as i32 - span_x) / 2;
    let top = match anchor {
        GlyphAnchor::TopMid => GLYPH_EDGE_MARGIN,
        GlyphAnchor::BottomMid => SCREEN_HEIGHT as i32 - GLYPH_EDGE_MARGIN - span_y,
    };

    Point::new(left - min.x, top - min.y)
}

/// Min/max corners of the fixed point set.
fn bounding_box() -> (Point, Point) {
    let mut min = GLYPH_POINTS[0];
    let mut max = GLYPH_POINTS[0];
    for p in GLYPH_POINTS {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (min, max)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> (i32, i32) {
        let (min, max) = bounding_box();
        (max.x - min.x, max.y - min.y)
    }

    #[test]
    fn test_glyph_shape() {
        // Five points, alternating valley and peak
        assert_eq!(GLYPH_POINTS.len(), 5);
        let (span_x, span_y) = spans();
        assert_eq!(span_x, 235);
        assert_eq!(span_y, 65);
    }

    #[test]
    fn test_post_build_anchor_is_top_mid() {
        assert_eq!(Glyph::new().anchor(), GlyphAnchor::TopMid);
    }

    #[test]
    fn test_anchor_for_phase() {
        assert_eq!(GlyphAnchor::for_phase(TogglePhase::Even), GlyphAnchor::TopMid);
        assert_eq!(GlyphAnchor::for_phase(TogglePhase::Odd), GlyphAnchor::BottomMid);
    }

    #[test]
    fn test_top_mid_placement() {
        let glyph = Glyph::new();
        let points = glyph.anchored_points();
        let top = points.iter().map(|p| p.y).min().unwrap();
        let left = points.iter().map(|p| p.x).min().unwrap();
        assert_eq!(top, GLYPH_EDGE_MARGIN);
        assert_eq!(left, (SCREEN_WIDTH as i32 - 235) / 2);
    }

    #[test]
    fn test_bottom_mid_placement() {
        let mut glyph = Glyph::new();
        glyph.set_anchor(GlyphAnchor::BottomMid);
        let points = glyph.anchored_points();
        let bottom = points.iter().map(|p| p.y).max().unwrap();
        assert_eq!(bottom, SCREEN_HEIGHT as i32 - GLYPH_EDGE_MARGIN);
    }

    #[test]
    fn test_reanchoring_preserves_geometry() {
        let mut glyph = Glyph::new();
        let top_points = glyph.anchored_points();
        glyph.set_anchor(GlyphAnchor::BottomMid);
        glyph.set_anchor(GlyphAnchor::TopMid);
        assert_eq!(glyph.anchored_points(), top_points);

        // Relative shape is identical under both anchors
        glyph.set_anchor(GlyphAnchor::BottomMid);
        let bottom_points = glyph.anchored_points();
        let delta = bottom_points[0] - top_points[0];
        for (bottom, top) in bottom_points.iter().zip(top_points.iter()) {
            assert_eq!(*bottom - *top, delta);
        }
    }
}
