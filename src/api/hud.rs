use crate::core::primitives::percent_difference;
use crate::core::{CandleStore, ViewportState};
use crate::render::{Color, RenderFrame, TextPrimitive};

use super::RenderStyle;

const LEFT_COLUMN_X: f64 = 10.0;
const MIDDLE_COLUMN_X: f64 = 180.0;
const RIGHT_COLUMN_X: f64 = 360.0;
const ROW_Y: [f64; 3] = [16.0, 48.0, 80.0];

/// Inputs of the heads-up display for one frame.
#[derive(Debug, Clone, Copy)]
pub(super) struct HudContext<'a> {
    pub viewport: &'a ViewportState,
    pub store: &'a CandleStore,
    pub symbol_name: &'a str,
}

pub(super) fn append_hud(frame: &mut RenderFrame, hud: HudContext<'_>, style: &RenderStyle) {
    let viewport = hud.viewport;
    let mut push = |text: String, x: f64, y: f64, color: Color| {
        frame
            .texts
            .push(TextPrimitive::new(text, x, y, style.hud_font_size_px, color));
    };
    let color = style.hud_text_color;

    push(
        format!("Candle Idx: {}", viewport.current_candle_index()),
        LEFT_COLUMN_X,
        ROW_Y[0],
        color,
    );
    push(
        format!("Pip Idx: {}", viewport.current_pip_index()),
        LEFT_COLUMN_X,
        ROW_Y[1],
        color,
    );
    push(
        format!("Candles: {}", hud.store.len()),
        LEFT_COLUMN_X,
        ROW_Y[2],
        color,
    );
    push(
        format!("Pip Price: {:.4}", viewport.price_per_pip()),
        MIDDLE_COLUMN_X,
        ROW_Y[0],
        color,
    );
    push(
        format!("Period: {:.2}", viewport.candles_shown()),
        MIDDLE_COLUMN_X,
        ROW_Y[2],
        color,
    );
    if !hud.symbol_name.is_empty() {
        push(hud.symbol_name.to_owned(), RIGHT_COLUMN_X, ROW_Y[0], color);
    }

    let (zero_diff, zero_diff_color) = zero_diff(hud, style);
    push(
        format!("Zero Diff: {zero_diff:.2}%"),
        RIGHT_COLUMN_X,
        ROW_Y[1],
        zero_diff_color,
    );
}

/// Percent difference between the current candle's close and the zero price.
fn zero_diff(hud: HudContext<'_>, style: &RenderStyle) -> (f64, Color) {
    let zero_price = hud.viewport.zero_price();
    match hud.store.get(hud.viewport.current_candle_index()) {
        Some(candle) => {
            let color = if zero_price > candle.close {
                style.bearish_color
            } else {
                style.bullish_color
            };
            (percent_difference(candle.close, zero_price), color)
        }
        None => (0.0, style.hud_text_color),
    }
}
