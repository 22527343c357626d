mod navigation;
mod zoom;

use serde::{Deserialize, Serialize};

pub use navigation::{NavigationController, NavigationTuning, TickOutcome};
pub use zoom::ZoomLevels;

/// One discrete navigation request sampled from host input for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigationCommand {
    /// Scroll one pip row up (towards higher prices).
    PanUp,
    PanDown,
    /// Scroll `candles_per_move` candles towards the start of the data.
    PanLeft,
    PanRight,
    /// Show fewer candles.
    ZoomIn,
    /// Show more candles.
    ZoomOut,
    /// Make each pip row cover more price.
    PriceScaleUp,
    PriceScaleDown,
    /// Pan further per step.
    StepSizeUp,
    StepSizeDown,
}

impl NavigationCommand {
    /// Pan commands in the order they are applied within a tick.
    pub const PAN_ORDER: [Self; 4] = [Self::PanUp, Self::PanDown, Self::PanLeft, Self::PanRight];

    /// Zoom, price-scale and step-size commands in the order they are applied
    /// after pans.
    pub const ADJUST_ORDER: [Self; 6] = [
        Self::ZoomOut,
        Self::ZoomIn,
        Self::PriceScaleUp,
        Self::PriceScaleDown,
        Self::StepSizeUp,
        Self::StepSizeDown,
    ];
}
