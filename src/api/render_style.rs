use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult, ensure_positive};
use crate::render::Color;

/// Style contract for the chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub bullish_color: Color,
    pub bearish_color: Color,
    pub pip_line_color: Color,
    pub price_label_color: Color,
    pub hud_text_color: Color,
    pub price_font_size_px: f64,
    pub hud_font_size_px: f64,
    /// Width of the wick rectangle, centered in the candle column.
    pub wick_width_px: f64,
    /// Blank space left and right of the body inside the candle column.
    pub candle_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bullish_color: Color::rgb8(0x26, 0xa6, 0x9a),
            bearish_color: Color::rgb8(0xef, 0x53, 0x50),
            pip_line_color: Color::rgb8(0x80, 0x80, 0x80).with_alpha(0.25),
            price_label_color: Color::rgb8(0xb2, 0xb5, 0xbe),
            hud_text_color: Color::rgb(1.0, 1.0, 1.0),
            price_font_size_px: 12.0,
            hud_font_size_px: 16.0,
            wick_width_px: 2.0,
            candle_padding_px: 2.0,
        }
    }
}

impl RenderStyle {
    #[must_use]
    pub fn with_candle_colors(mut self, bullish: Color, bearish: Color) -> Self {
        self.bullish_color = bullish;
        self.bearish_color = bearish;
        self
    }

    #[must_use]
    pub fn with_candle_geometry(mut self, wick_width_px: f64, candle_padding_px: f64) -> Self {
        self.wick_width_px = wick_width_px;
        self.candle_padding_px = candle_padding_px;
        self
    }

    #[must_use]
    pub fn candle_color(&self, is_bullish: bool) -> Color {
        if is_bullish {
            self.bullish_color
        } else {
            self.bearish_color
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for color in [
            self.bullish_color,
            self.bearish_color,
            self.pip_line_color,
            self.price_label_color,
            self.hud_text_color,
        ] {
            color.validate()?;
        }
        ensure_positive("price_font_size_px", self.price_font_size_px)?;
        ensure_positive("hud_font_size_px", self.hud_font_size_px)?;
        ensure_positive("wick_width_px", self.wick_width_px)?;
        if !self.candle_padding_px.is_finite() || self.candle_padding_px < 0.0 {
            return Err(ChartError::invalid_parameter(
                "candle_padding_px",
                format!("must be finite and >= 0, got {}", self.candle_padding_px),
            ));
        }
        Ok(self)
    }
}
