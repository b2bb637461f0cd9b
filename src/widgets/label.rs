//! Update counter label rendering.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;

use crate::config::{LABEL_INSET_X, SCREEN_HEIGHT};
use crate::styles::{BOTTOM_LEFT, COUNTER_STYLE_WHITE};

/// Draw the counter text in the bottom-left screen corner.
pub fn draw_counter_label<D>(
    display: &mut D,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let position = Point::new(LABEL_INSET_X, SCREEN_HEIGHT as i32);
    Text::with_text_style(text, position, COUNTER_STYLE_WHITE, BOTTOM_LEFT)
        .draw(display)
        .ok();
}
