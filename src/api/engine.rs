use tracing::{debug, trace};

use crate::core::{CandleStore, ScreenSize, ViewportState, VisibleCandle, visible_candles};
use crate::error::ChartResult;
use crate::interaction::{NavigationCommand, NavigationController, TickOutcome, ZoomLevels};
use crate::render::{RenderFrame, Renderer};

use super::candle_primitives::append_candle_primitives;
use super::hud::{HudContext, append_hud};
use super::pip_grid::append_pip_grid;
use super::{ChartConfig, ChartLayout, RenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the candle store, viewport state and navigation
/// controller for one chart, and hands each frame to the renderer. It is
/// driven from a single thread: call `resize` when the surface changes,
/// `tick` once per frame with the active commands, then `render`.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    store: CandleStore,
    viewport: ViewportState,
    navigation: NavigationController,
    layout: ChartLayout,
    style: RenderStyle,
    symbol_name: String,
    screen: ScreenSize,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig, store: CandleStore) -> ChartResult<Self> {
        config.validate()?;

        let zoom = ZoomLevels::new(config.zoom_levels, config.starting_zoom_index)?;
        let zero_price = config
            .zero_price
            .or_else(|| store.first().map(|candle| candle.open))
            .unwrap_or(0.0);
        let viewport = ViewportState::new(
            zero_price,
            config.pip_pricing,
            config.pips_height,
            zoom.current(),
        )?;
        let navigation = NavigationController::new(zoom, config.navigation)?;

        debug!(
            symbol = %config.symbol_name,
            candles = store.len(),
            zero_price,
            candles_shown = viewport.candles_shown(),
            "chart engine initialized"
        );

        Ok(Self {
            renderer,
            store,
            viewport,
            navigation,
            layout: config.layout,
            style: config.style,
            symbol_name: config.symbol_name,
            screen: ScreenSize::default(),
        })
    }

    #[must_use]
    pub fn store(&self) -> &CandleStore {
        &self.store
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    /// Direct viewport access for host-driven jumps (for example, go to candle).
    pub fn viewport_mut(&mut self) -> &mut ViewportState {
        &mut self.viewport
    }

    #[must_use]
    pub fn navigation(&self) -> &NavigationController {
        &self.navigation
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn symbol_name(&self) -> &str {
        &self.symbol_name
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.style
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        self.style = style.validate()?;
        Ok(())
    }

    /// Refits the viewport to a new surface size.
    pub fn resize(&mut self, screen: ScreenSize) {
        self.screen = screen;
        self.layout.apply(&mut self.viewport, screen);
        debug!(
            width = screen.width,
            height = screen.height,
            pixels_per_pip = self.viewport.pixels_per_pip(),
            candle_width_px = self.viewport.candle_width_px(),
            "chart resized"
        );
    }

    /// Scrolls vertically so `price` sits in the middle pip row.
    pub fn scroll_to_price(&mut self, price: f64) {
        let half_window = (self.viewport.pips_height() / 2.0) as i64;
        let pip = self.viewport.price_to_pip_index(price);
        self.viewport
            .set_current_pip_index(pip.saturating_add(half_window));
    }

    /// Applies one tick of navigation input.
    pub fn tick(&mut self, commands: &[NavigationCommand]) -> TickOutcome {
        let outcome = self.navigation.apply(&mut self.viewport, commands);
        if outcome.changed {
            self.layout.apply(&mut self.viewport, self.screen);
            trace!(
                tick = outcome.tick,
                candle = self.viewport.current_candle_index(),
                pip = self.viewport.current_pip_index(),
                "viewport moved"
            );
        }
        outcome
    }

    #[must_use]
    pub fn visible_candles(&self) -> Vec<VisibleCandle> {
        visible_candles(&self.store, &self.viewport)
    }

    /// Assembles grid, candles and HUD for the current state.
    ///
    /// Returns an empty frame while the surface has no area.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.screen);
        if self.screen.is_empty() {
            return frame;
        }

        append_pip_grid(&mut frame, &self.viewport, &self.style);
        let candles = self.visible_candles();
        append_candle_primitives(
            &mut frame,
            &candles,
            self.viewport.candle_width_px(),
            &self.style,
        );
        append_hud(
            &mut frame,
            HudContext {
                viewport: &self.viewport,
                store: &self.store,
                symbol_name: &self.symbol_name,
            },
            &self.style,
        );
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        trace!(
            lines = frame.lines.len(),
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
