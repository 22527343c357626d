use smallvec::SmallVec;

use crate::core::VisibleCandle;
use crate::render::{RectPrimitive, RenderFrame};

use super::RenderStyle;

/// Wick rectangle followed by body rectangle.
pub type CandlePrimitives = SmallVec<[RectPrimitive; 2]>;

/// Builds the filled rectangles for one visible candle.
///
/// The wick is centered in the candle column and spans the clipped high/low.
/// The body fills the column minus `candle_padding_px` on each side.
#[must_use]
pub fn candle_primitives(
    candle: &VisibleCandle,
    candle_width_px: f64,
    style: &RenderStyle,
) -> CandlePrimitives {
    let color = style.candle_color(candle.is_bullish);
    let wick_x = candle.pixel_x + candle_width_px / 2.0 - style.wick_width_px / 2.0;
    let body_x = candle.pixel_x + style.candle_padding_px;
    let body_width = (candle_width_px - 2.0 * style.candle_padding_px).max(0.0);

    let mut out = CandlePrimitives::new();
    out.push(RectPrimitive::vertical_span(
        wick_x,
        style.wick_width_px,
        candle.wick_top_px,
        candle.wick_bottom_px,
        color,
    ));
    out.push(RectPrimitive::vertical_span(
        body_x,
        body_width,
        candle.body_top_px,
        candle.body_bottom_px,
        color,
    ));
    out
}

pub(super) fn append_candle_primitives(
    frame: &mut RenderFrame,
    candles: &[VisibleCandle],
    candle_width_px: f64,
    style: &RenderStyle,
) {
    frame.rects.reserve(candles.len() * 2);
    for candle in candles {
        frame
            .rects
            .extend(candle_primitives(candle, candle_width_px, style));
    }
}
