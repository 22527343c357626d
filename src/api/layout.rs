use serde::{Deserialize, Serialize};

use crate::core::{ScreenSize, ViewportState};

/// Screen space reserved around the chart viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Rows above the viewport kept for the heads-up display.
    pub hud_height_px: u32,
    pub footer_height_px: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            hud_height_px: 128,
            footer_height_px: 48,
        }
    }
}

impl ChartLayout {
    /// Fits the viewport to `screen` below the HUD and above the footer.
    ///
    /// Both pixel extents snap down to a whole number of pixels per pip row
    /// and per candle column so grid lines land on integer rows.
    pub fn apply(self, viewport: &mut ViewportState, screen: ScreenSize) {
        let usable_height = screen
            .height
            .saturating_sub(self.hud_height_px)
            .saturating_sub(self.footer_height_px);

        viewport.set_origin(0.0, f64::from(self.hud_height_px));
        viewport.set_height_in_pixels(snap_to_cells(
            f64::from(usable_height),
            viewport.pips_height(),
        ));
        viewport.set_width_in_pixels(snap_to_cells(
            f64::from(screen.width),
            viewport.candles_shown(),
        ));
    }
}

fn snap_to_cells(extent_px: f64, cells: f64) -> f64 {
    (extent_px / cells).floor() * cells
}
