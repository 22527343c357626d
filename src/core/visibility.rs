use serde::{Deserialize, Serialize};

use crate::core::{Candle, CandleStore, ColumnPlacement, PricePlacement, ViewportState};

/// Height a body is stretched to when open and close land on the same pixel row.
pub const MIN_BODY_HEIGHT_PX: f64 = 5.0;

/// A candle that survived culling, with its clipped pixel geometry.
///
/// Valid for one render pass only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleCandle {
    pub index: usize,
    pub candle: Candle,
    /// Left edge of the candle column.
    pub pixel_x: f64,
    pub wick_top_px: f64,
    pub wick_bottom_px: f64,
    pub body_top_px: f64,
    pub body_bottom_px: f64,
    pub is_bullish: bool,
}

/// Returns the candles inside the viewport window, in ascending index order.
///
/// A candle is admitted only when its high or its low lies inside the visible
/// price range. A wick that crosses the whole window with both ends outside
/// is therefore skipped. Slots with a zero open carry no data and are skipped.
///
/// The result depends only on `store` and `viewport`.
#[must_use]
pub fn visible_candles(store: &CandleStore, viewport: &ViewportState) -> Vec<VisibleCandle> {
    let from = viewport.current_candle_index();
    let to = viewport.last_column_index().min(store.len());
    if from >= to {
        return Vec::new();
    }

    store
        .window(from..to)
        .iter()
        .zip(from..)
        .filter(|(candle, _)| !candle.is_empty_slot())
        .filter(|(candle, _)| {
            viewport.contains_price(candle.high) || viewport.contains_price(candle.low)
        })
        .filter_map(|(candle, index)| clip_candle(*candle, index, viewport))
        .collect()
}

fn clip_candle(candle: Candle, index: usize, viewport: &ViewportState) -> Option<VisibleCandle> {
    let ColumnPlacement::OnScreen(pixel_x) = viewport.candle_index_to_pixel_x(index) else {
        return None;
    };
    let top = viewport.top_px();
    let bottom = viewport.bottom_px();

    let wick_top_px = match viewport.price_to_pixel_y(candle.high) {
        PricePlacement::Below => return None,
        PricePlacement::Above => top,
        PricePlacement::OnScreen(y) => y,
    };
    let wick_bottom_px = match viewport.price_to_pixel_y(candle.low) {
        PricePlacement::Above => return None,
        PricePlacement::Below => bottom,
        PricePlacement::OnScreen(y) => y,
    };

    let open_px = viewport.price_to_pixel_y(candle.open).or_edges(bottom, top);
    let close_px = viewport.price_to_pixel_y(candle.close).or_edges(bottom, top);
    let is_bullish = candle.is_bullish();
    let (mut body_top_px, body_bottom_px) = if is_bullish {
        (close_px, open_px)
    } else {
        (open_px, close_px)
    };
    if body_top_px == body_bottom_px {
        body_top_px -= MIN_BODY_HEIGHT_PX;
    }

    Some(VisibleCandle {
        index,
        candle,
        pixel_x,
        wick_top_px,
        wick_bottom_px,
        body_top_px,
        body_bottom_px,
        is_bullish,
    })
}
