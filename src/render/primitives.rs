use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color with channels in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Opaque color from 8-bit channels, e.g. `Color::rgb8(0x26, 0xa6, 0x9a)`.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        match channels
            .into_iter()
            .find(|value| !(0.0..=1.0).contains(value))
        {
            // NaN fails the range check too.
            Some(value) => Err(ChartError::invalid_parameter(
                "color",
                format!("channels must lie in [0, 1], got {value}"),
            )),
            None => Ok(()),
        }
    }
}

/// Horizontal rule in pixel space, drawn from `x` to `x + length` at row `y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    pub thickness: f64,
    pub color: Color,
}

impl LinePrimitive {
    /// One-pixel rule.
    #[must_use]
    pub const fn horizontal(x: f64, y: f64, length: f64, color: Color) -> Self {
        Self {
            x,
            y,
            length,
            thickness: 1.0,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.length.is_finite() {
            return Err(ChartError::invalid_parameter(
                "line",
                "position and length must be finite",
            ));
        }
        if self.length < 0.0 {
            return Err(ChartError::invalid_parameter("line", "length must be >= 0"));
        }
        if !(self.thickness.is_finite() && self.thickness > 0.0) {
            return Err(ChartError::invalid_parameter(
                "line",
                "thickness must be finite and > 0",
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one filled rectangle in pixel space.
///
/// `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color,
        }
    }

    /// Rectangle covering the vertical span between `y_a` and `y_b` in either order.
    #[must_use]
    pub fn vertical_span(x: f64, width: f64, y_a: f64, y_b: f64, color: Color) -> Self {
        Self::new(x, y_a.min(y_b), width, (y_b - y_a).abs(), color)
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::invalid_parameter(
                "rect",
                "coordinates must be finite",
            ));
        }
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ChartError::invalid_parameter("rect", "size must be finite"));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::invalid_parameter("rect", "size must be >= 0"));
        }
        self.color.validate()
    }
}

/// Draw command for one left-aligned label in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, font_size_px: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::invalid_parameter(
                "text",
                "text primitive must not be empty",
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::invalid_parameter(
                "text",
                "coordinates must be finite",
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::invalid_parameter(
                "text",
                "font size must be finite and > 0",
            ));
        }
        self.color.validate()
    }
}
