use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::ViewportState;
use crate::error::{ChartError, ChartResult};

use super::{NavigationCommand, ZoomLevels};

/// Rate limits and step size for keyboard-style navigation.
///
/// Pans are honored on ticks divisible by `pan_interval_ticks`; zoom,
/// price-scale and step-size changes on ticks divisible by
/// `adjust_interval_ticks`. Held keys therefore pan quickly and zoom slowly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationTuning {
    #[serde(default = "default_pan_interval_ticks")]
    pub pan_interval_ticks: u64,
    #[serde(default = "default_adjust_interval_ticks")]
    pub adjust_interval_ticks: u64,
    #[serde(default = "default_candles_per_move")]
    pub candles_per_move: usize,
}

impl Default for NavigationTuning {
    fn default() -> Self {
        Self {
            pan_interval_ticks: default_pan_interval_ticks(),
            adjust_interval_ticks: default_adjust_interval_ticks(),
            candles_per_move: default_candles_per_move(),
        }
    }
}

impl NavigationTuning {
    pub fn validate(self) -> ChartResult<Self> {
        if self.pan_interval_ticks == 0 {
            return Err(ChartError::invalid_parameter(
                "pan_interval_ticks",
                "must be >= 1",
            ));
        }
        if self.adjust_interval_ticks == 0 {
            return Err(ChartError::invalid_parameter(
                "adjust_interval_ticks",
                "must be >= 1",
            ));
        }
        if self.candles_per_move == 0 {
            return Err(ChartError::invalid_parameter(
                "candles_per_move",
                "must be >= 1",
            ));
        }
        Ok(self)
    }
}

fn default_pan_interval_ticks() -> u64 {
    5
}

fn default_adjust_interval_ticks() -> u64 {
    25
}

fn default_candles_per_move() -> usize {
    1
}

/// What one `NavigationController::apply` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Tick number the commands were sampled on.
    pub tick: u64,
    pub pan_sampled: bool,
    pub adjust_sampled: bool,
    /// At least one viewport or controller value moved.
    pub changed: bool,
}

/// Per-tick state machine turning navigation commands into viewport mutations.
///
/// All inputs are clamped, so applying commands never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    tuning: NavigationTuning,
    zoom: ZoomLevels,
    candles_per_move: usize,
    tick: u64,
}

impl NavigationController {
    pub fn new(zoom: ZoomLevels, tuning: NavigationTuning) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        Ok(Self {
            tuning,
            zoom,
            candles_per_move: tuning.candles_per_move,
            tick: 0,
        })
    }

    #[must_use]
    pub fn tuning(&self) -> NavigationTuning {
        self.tuning
    }

    #[must_use]
    pub fn zoom_levels(&self) -> &ZoomLevels {
        &self.zoom
    }

    #[must_use]
    pub fn candles_per_move(&self) -> usize {
        self.candles_per_move
    }

    /// Number of the next tick to be sampled.
    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Applies the commands active during one tick and advances the tick counter.
    ///
    /// Duplicate commands in `commands` count once. Pans run before any
    /// zoom, price-scale or step-size change.
    pub fn apply(
        &mut self,
        viewport: &mut ViewportState,
        commands: &[NavigationCommand],
    ) -> TickOutcome {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);

        let pan_sampled = tick % self.tuning.pan_interval_ticks == 0;
        let adjust_sampled = tick % self.tuning.adjust_interval_ticks == 0;
        let mut changed = false;

        if pan_sampled {
            for command in NavigationCommand::PAN_ORDER {
                if commands.contains(&command) {
                    changed |= self.apply_pan(viewport, command);
                }
            }
        }
        if adjust_sampled {
            for command in NavigationCommand::ADJUST_ORDER {
                if commands.contains(&command) {
                    changed |= self.apply_adjust(viewport, command);
                }
            }
        }

        TickOutcome {
            tick,
            pan_sampled,
            adjust_sampled,
            changed,
        }
    }

    fn apply_pan(&self, viewport: &mut ViewportState, command: NavigationCommand) -> bool {
        let step = i64::try_from(self.candles_per_move).unwrap_or(i64::MAX);
        let before = (viewport.current_candle_index(), viewport.current_pip_index());
        match command {
            NavigationCommand::PanUp => viewport.scroll_pips(1),
            NavigationCommand::PanDown => viewport.scroll_pips(-1),
            NavigationCommand::PanLeft => viewport.scroll_candles(-step),
            NavigationCommand::PanRight => viewport.scroll_candles(step),
            _ => return false,
        }
        before != (viewport.current_candle_index(), viewport.current_pip_index())
    }

    fn apply_adjust(&mut self, viewport: &mut ViewportState, command: NavigationCommand) -> bool {
        match command {
            NavigationCommand::ZoomOut => {
                let level = self.zoom.zoom_out();
                apply_zoom_level(viewport, level, "zoom out")
            }
            NavigationCommand::ZoomIn => {
                let level = self.zoom.zoom_in();
                apply_zoom_level(viewport, level, "zoom in")
            }
            NavigationCommand::PriceScaleUp => {
                viewport.increase_price_per_pip();
                debug!(
                    price_per_pip = viewport.price_per_pip(),
                    "pip price increased"
                );
                true
            }
            NavigationCommand::PriceScaleDown => {
                let before = viewport.price_per_pip();
                viewport.decrease_price_per_pip();
                debug!(
                    price_per_pip = viewport.price_per_pip(),
                    "pip price decreased"
                );
                before != viewport.price_per_pip()
            }
            NavigationCommand::StepSizeUp => {
                self.candles_per_move = self.candles_per_move.saturating_add(1);
                debug!(
                    candles_per_move = self.candles_per_move,
                    "candles per move increased"
                );
                true
            }
            NavigationCommand::StepSizeDown => {
                if self.candles_per_move <= 1 {
                    return false;
                }
                self.candles_per_move -= 1;
                debug!(
                    candles_per_move = self.candles_per_move,
                    "candles per move decreased"
                );
                true
            }
            _ => false,
        }
    }
}

fn apply_zoom_level(viewport: &mut ViewportState, level: Option<f64>, action: &str) -> bool {
    let Some(level) = level else {
        return false;
    };
    if let Err(err) = viewport.set_width_in_candles(level) {
        warn!(error = %err, level, "skipping {action}");
        return false;
    }
    debug!(candles_shown = level, "{action}");
    true
}
