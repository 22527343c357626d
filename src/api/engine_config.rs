use serde::{Deserialize, Serialize};

use crate::core::PipPricing;
use crate::error::{ChartError, ChartResult, ensure_positive};
use crate::interaction::{NavigationTuning, ZoomLevels};

use super::{ChartLayout, RenderStyle};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can load chart setup from JSON instead of inventing
/// their own format. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub symbol_name: String,
    /// Ascending candles-shown values cycled by zoom commands.
    #[serde(default = "default_zoom_levels")]
    pub zoom_levels: Vec<f64>,
    #[serde(default)]
    pub starting_zoom_index: usize,
    #[serde(default = "default_pips_height")]
    pub pips_height: f64,
    #[serde(default)]
    pub pip_pricing: PipPricing,
    /// Origin of the pip axis. Falls back to the open of the first candle.
    #[serde(default)]
    pub zero_price: Option<f64>,
    #[serde(default)]
    pub navigation: NavigationTuning,
    #[serde(default)]
    pub layout: ChartLayout,
    #[serde(default)]
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            symbol_name: String::new(),
            zoom_levels: default_zoom_levels(),
            starting_zoom_index: 0,
            pips_height: default_pips_height(),
            pip_pricing: PipPricing::default(),
            zero_price: None,
            navigation: NavigationTuning::default(),
            layout: ChartLayout::default(),
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(symbol_name: impl Into<String>) -> Self {
        Self {
            symbol_name: symbol_name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_zoom_levels(mut self, levels: Vec<f64>, starting_index: usize) -> Self {
        self.zoom_levels = levels;
        self.starting_zoom_index = starting_index;
        self
    }

    #[must_use]
    pub fn with_pips_height(mut self, pips_height: f64) -> Self {
        self.pips_height = pips_height;
        self
    }

    #[must_use]
    pub fn with_pip_pricing(mut self, pricing: PipPricing) -> Self {
        self.pip_pricing = pricing;
        self
    }

    #[must_use]
    pub fn with_zero_price(mut self, zero_price: f64) -> Self {
        self.zero_price = Some(zero_price);
        self
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: NavigationTuning) -> Self {
        self.navigation = navigation;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ChartLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        ZoomLevels::new(self.zoom_levels.clone(), self.starting_zoom_index)?;
        ensure_positive("pips_height", self.pips_height)?;
        self.pip_pricing.validate()?;
        if let Some(zero_price) = self.zero_price {
            if !zero_price.is_finite() {
                return Err(ChartError::invalid_parameter(
                    "zero_price",
                    format!("must be finite, got {zero_price}"),
                ));
            }
        }
        self.navigation.validate()?;
        self.style.validate()?;
        Ok(())
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChartResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn default_zoom_levels() -> Vec<f64> {
    vec![15.0, 30.0, 60.0, 120.0, 240.0]
}

fn default_pips_height() -> f64 {
    24.0
}
