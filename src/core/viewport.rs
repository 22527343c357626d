use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult, ensure_positive};

const RANGE_SLACK_PIPS: f64 = 1e-9;

/// Price represented by one pip row, with its runtime adjustment bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipPricing {
    pub initial: f64,
    pub increment: f64,
    pub minimum: f64,
}

impl Default for PipPricing {
    fn default() -> Self {
        Self {
            initial: 0.000_5,
            increment: 0.000_1,
            minimum: 0.000_1,
        }
    }
}

impl PipPricing {
    pub fn validate(self) -> ChartResult<Self> {
        ensure_positive("pip_price_increment", self.increment)?;
        ensure_positive("pip_price_minimum", self.minimum)?;
        if !self.initial.is_finite() || self.initial < self.minimum {
            return Err(ChartError::invalid_parameter(
                "price_per_pip",
                format!(
                    "must be finite and >= pip_price_minimum ({}), got {}",
                    self.minimum, self.initial
                ),
            ));
        }
        Ok(self)
    }
}

/// Vertical placement of a price relative to the visible pip window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricePlacement {
    /// Pip index is under the bottom row.
    Below,
    /// Pip index is over the top row.
    Above,
    /// Absolute screen Y of the pip row.
    OnScreen(f64),
}

impl PricePlacement {
    #[must_use]
    pub fn on_screen(self) -> Option<f64> {
        match self {
            Self::OnScreen(y) => Some(y),
            Self::Below | Self::Above => None,
        }
    }

    /// Resolves off-window placements to a caller-chosen value per side.
    #[must_use]
    pub fn or_edges(self, below: f64, above: f64) -> f64 {
        match self {
            Self::Below => below,
            Self::Above => above,
            Self::OnScreen(y) => y,
        }
    }
}

/// Horizontal placement of a candle column relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnPlacement {
    BeforeViewport,
    AfterViewport,
    /// Absolute screen X of the column's left edge.
    OnScreen(f64),
}

impl ColumnPlacement {
    #[must_use]
    pub fn on_screen(self) -> Option<f64> {
        match self {
            Self::OnScreen(x) => Some(x),
            Self::BeforeViewport | Self::AfterViewport => None,
        }
    }
}

/// Scroll position, zoom and pixel scales of the chart grid.
///
/// Rows are pips counted from `zero_price`, columns are candle indices.
/// `current_pip_index` is the top row and `current_candle_index` the leftmost
/// column. Derived pixel scales are recomputed by every setter that touches
/// one of their inputs, so readers never observe a stale scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    zero_price: f64,
    price_per_pip: f64,
    pip_price_increment: f64,
    pip_price_minimum: f64,
    current_candle_index: usize,
    current_pip_index: i64,
    pips_height: f64,
    candles_shown: f64,
    viewport_width_px: f64,
    viewport_height_px: f64,
    origin_x_px: f64,
    origin_y_px: f64,
    pixels_per_pip: f64,
    candle_width_px: f64,
}

impl ViewportState {
    /// Creates a viewport with zero pixel size anchored at the screen origin.
    pub fn new(
        zero_price: f64,
        pricing: PipPricing,
        pips_height: f64,
        candles_shown: f64,
    ) -> ChartResult<Self> {
        if !zero_price.is_finite() {
            return Err(ChartError::invalid_parameter(
                "zero_price",
                format!("must be finite, got {zero_price}"),
            ));
        }
        let pricing = pricing.validate()?;

        Ok(Self {
            zero_price,
            price_per_pip: pricing.initial,
            pip_price_increment: pricing.increment,
            pip_price_minimum: pricing.minimum,
            current_candle_index: 0,
            current_pip_index: 0,
            pips_height: ensure_positive("pips_height", pips_height)?,
            candles_shown: ensure_positive("candles_shown", candles_shown)?,
            viewport_width_px: 0.0,
            viewport_height_px: 0.0,
            origin_x_px: 0.0,
            origin_y_px: 0.0,
            pixels_per_pip: 0.0,
            candle_width_px: 0.0,
        })
    }

    #[must_use]
    pub fn zero_price(&self) -> f64 {
        self.zero_price
    }

    #[must_use]
    pub fn price_per_pip(&self) -> f64 {
        self.price_per_pip
    }

    #[must_use]
    pub fn pip_price_increment(&self) -> f64 {
        self.pip_price_increment
    }

    #[must_use]
    pub fn pip_price_minimum(&self) -> f64 {
        self.pip_price_minimum
    }

    #[must_use]
    pub fn current_candle_index(&self) -> usize {
        self.current_candle_index
    }

    #[must_use]
    pub fn current_pip_index(&self) -> i64 {
        self.current_pip_index
    }

    #[must_use]
    pub fn pips_height(&self) -> f64 {
        self.pips_height
    }

    #[must_use]
    pub fn candles_shown(&self) -> f64 {
        self.candles_shown
    }

    #[must_use]
    pub fn viewport_width_px(&self) -> f64 {
        self.viewport_width_px
    }

    #[must_use]
    pub fn viewport_height_px(&self) -> f64 {
        self.viewport_height_px
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x_px, self.origin_y_px)
    }

    #[must_use]
    pub fn pixels_per_pip(&self) -> f64 {
        self.pixels_per_pip
    }

    #[must_use]
    pub fn candle_width_px(&self) -> f64 {
        self.candle_width_px
    }

    /// Screen Y of the top pip row.
    #[must_use]
    pub fn top_px(&self) -> f64 {
        self.origin_y_px
    }

    /// Screen Y of the bottom pip row.
    #[must_use]
    pub fn bottom_px(&self) -> f64 {
        self.origin_y_px + self.viewport_height_px
    }

    pub fn set_height_in_pips(&mut self, pips: f64) -> ChartResult<()> {
        self.pips_height = ensure_positive("pips_height", pips)?;
        self.pixels_per_pip = self.viewport_height_px / self.pips_height;
        trace!(
            pips_height = pips,
            pixels_per_pip = self.pixels_per_pip,
            "set height in pips"
        );
        Ok(())
    }

    /// Negative and non-finite sizes collapse to zero.
    pub fn set_height_in_pixels(&mut self, px: f64) {
        self.viewport_height_px = pixel_extent(px);
        self.pixels_per_pip = self.viewport_height_px / self.pips_height;
    }

    pub fn set_width_in_candles(&mut self, candles: f64) -> ChartResult<()> {
        self.candles_shown = ensure_positive("candles_shown", candles)?;
        self.candle_width_px = self.viewport_width_px / self.candles_shown;
        trace!(
            candles_shown = candles,
            candle_width_px = self.candle_width_px,
            "set width in candles"
        );
        Ok(())
    }

    /// Negative and non-finite sizes collapse to zero.
    pub fn set_width_in_pixels(&mut self, px: f64) {
        self.viewport_width_px = pixel_extent(px);
        self.candle_width_px = self.viewport_width_px / self.candles_shown;
    }

    pub fn set_origin(&mut self, x_px: f64, y_px: f64) {
        self.origin_x_px = x_px;
        self.origin_y_px = y_px;
    }

    pub fn set_current_candle_index(&mut self, index: usize) {
        self.current_candle_index = index;
    }

    pub fn set_current_pip_index(&mut self, index: i64) {
        self.current_pip_index = index;
    }

    /// Moves the leftmost column; never scrolls before candle 0.
    ///
    /// A step that would pass candle 0 stops there instead of being refused.
    pub fn scroll_candles(&mut self, delta: i64) {
        self.current_candle_index = if delta.is_negative() {
            let back = usize::try_from(delta.unsigned_abs()).unwrap_or(usize::MAX);
            self.current_candle_index.saturating_sub(back)
        } else {
            let forward = usize::try_from(delta).unwrap_or(usize::MAX);
            self.current_candle_index.saturating_add(forward)
        };
    }

    /// Moves the top row; rows outside the data range are allowed.
    pub fn scroll_pips(&mut self, delta: i64) {
        self.current_pip_index = self.current_pip_index.saturating_add(delta);
    }

    pub fn increase_price_per_pip(&mut self) {
        self.price_per_pip += self.pip_price_increment;
    }

    /// Steps down by the increment, snapping to the floor instead of undershooting it.
    pub fn decrease_price_per_pip(&mut self) {
        let lowered = self.price_per_pip - self.pip_price_increment;
        self.price_per_pip = if lowered >= self.pip_price_minimum {
            lowered
        } else {
            self.pip_price_minimum
        };
    }

    /// Pip row index containing `price`.
    ///
    /// Prices on a row boundary belong to the row above it, even when the
    /// division lands a rounding error short of the whole number.
    #[must_use]
    pub fn price_to_pip_index(&self, price: f64) -> i64 {
        let rows = (price - self.zero_price) / self.price_per_pip;
        let nearest = rows.round();
        if (rows - nearest).abs() <= RANGE_SLACK_PIPS * nearest.abs().max(1.0) {
            nearest as i64
        } else {
            rows.floor() as i64
        }
    }

    /// Inclusive `(bottom, top)` pip rows of the visible window.
    #[must_use]
    pub fn pip_window(&self) -> (i64, i64) {
        let top = self.current_pip_index;
        (top.saturating_sub(self.pips_height as i64), top)
    }

    #[must_use]
    pub fn price_to_pixel_y(&self, price: f64) -> PricePlacement {
        let pip = self.price_to_pip_index(price);
        let (bottom, top) = self.pip_window();
        if pip < bottom {
            PricePlacement::Below
        } else if pip > top {
            PricePlacement::Above
        } else {
            PricePlacement::OnScreen(self.origin_y_px + (top - pip) as f64 * self.pixels_per_pip)
        }
    }

    /// Price of the pip row `rows_below_top` rows under the top row.
    #[must_use]
    pub fn row_price(&self, rows_below_top: f64) -> f64 {
        (self.current_pip_index as f64 - rows_below_top) * self.price_per_pip + self.zero_price
    }

    /// Visible `(min, max)` price bounds.
    #[must_use]
    pub fn price_range(&self) -> (f64, f64) {
        let max = self.row_price(0.0);
        let min = max - self.pips_height * self.price_per_pip;
        (min, max)
    }

    /// Whether `price` lies inside `price_range`, tolerating rounding noise
    /// far below one pip.
    #[must_use]
    pub fn contains_price(&self, price: f64) -> bool {
        let (min, max) = self.price_range();
        let slack = self.price_per_pip * RANGE_SLACK_PIPS;
        price >= min - slack && price <= max + slack
    }

    /// Index of the last column that still maps on screen.
    #[must_use]
    pub fn last_column_index(&self) -> usize {
        self.current_candle_index
            .saturating_add(self.candles_shown as usize)
    }

    #[must_use]
    pub fn candle_index_to_pixel_x(&self, index: usize) -> ColumnPlacement {
        if index < self.current_candle_index {
            return ColumnPlacement::BeforeViewport;
        }
        if index > self.last_column_index() {
            return ColumnPlacement::AfterViewport;
        }
        let offset = (index - self.current_candle_index) as f64;
        ColumnPlacement::OnScreen(self.origin_x_px + offset * self.candle_width_px)
    }
}

fn pixel_extent(px: f64) -> f64 {
    if px.is_finite() { px.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ViewportState {
        let pricing = PipPricing {
            initial: 0.01,
            increment: 0.01,
            minimum: 0.01,
        };
        ViewportState::new(1.0, pricing, 20.0, 2.0).expect("valid viewport")
    }

    #[test]
    fn new_rejects_initial_price_below_floor() {
        let pricing = PipPricing {
            initial: 0.001,
            increment: 0.01,
            minimum: 0.01,
        };
        let err = ViewportState::new(1.0, pricing, 20.0, 2.0).expect_err("below floor");
        assert!(matches!(
            err,
            ChartError::InvalidParameter {
                name: "price_per_pip",
                ..
            }
        ));
    }

    #[test]
    fn failed_setter_keeps_previous_scale() {
        let mut viewport = viewport();
        viewport.set_height_in_pixels(400.0);
        assert!(viewport.set_height_in_pips(0.0).is_err());
        assert_eq!(viewport.pips_height(), 20.0);
        assert_eq!(viewport.pixels_per_pip(), 20.0);
    }

    #[test]
    fn pip_index_floors_negative_offsets() {
        let viewport = viewport();
        assert_eq!(viewport.price_to_pip_index(0.995), -1);
        assert_eq!(viewport.price_to_pip_index(1.0), 0);
    }

    #[test]
    fn pip_index_snaps_boundary_prices_to_their_row() {
        let viewport = viewport();
        assert_eq!(viewport.price_to_pip_index(1.2), 20);
        assert_eq!(viewport.price_to_pip_index(0.9), -10);
        assert_eq!(viewport.price_to_pip_index(1.0999), 9);
    }

    #[test]
    fn scroll_candles_saturates_at_zero() {
        let mut viewport = viewport();
        viewport.set_current_candle_index(2);
        viewport.scroll_candles(-5);
        assert_eq!(viewport.current_candle_index(), 0);
        viewport.scroll_candles(3);
        assert_eq!(viewport.current_candle_index(), 3);
    }
}
