use crate::core::ViewportState;
use crate::render::{LinePrimitive, RenderFrame, TextPrimitive};

use super::RenderStyle;

/// Distance of price labels from the right edge of the viewport.
pub const PRICE_LABEL_INSET_PX: f64 = 48.0;

/// Appends the pip row rules and their price labels.
///
/// The top rule spans the whole screen; each inner row gets a rule across the
/// viewport and a label with the row price.
pub(super) fn append_pip_grid(
    frame: &mut RenderFrame,
    viewport: &ViewportState,
    style: &RenderStyle,
) {
    let (origin_x, origin_y) = viewport.origin();
    let width = viewport.viewport_width_px();

    frame.lines.push(LinePrimitive::horizontal(
        0.0,
        origin_y,
        f64::from(frame.screen.width),
        style.pip_line_color,
    ));

    let mut row = 1.0;
    while row < viewport.pips_height() {
        let y = origin_y + row * viewport.pixels_per_pip();
        frame.lines.push(LinePrimitive::horizontal(
            origin_x,
            y,
            width,
            style.pip_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            format_price(viewport.row_price(row)),
            origin_x + width - PRICE_LABEL_INSET_PX,
            y,
            style.price_font_size_px,
            style.price_label_color,
        ));
        row += 1.0;
    }
}

#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.4}")
}
