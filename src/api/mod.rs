mod candle_primitives;
mod engine;
mod engine_config;
mod hud;
mod layout;
mod pip_grid;
mod render_style;

pub use candle_primitives::{CandlePrimitives, candle_primitives};
pub use engine::ChartEngine;
pub use engine_config::ChartConfig;
pub use layout::ChartLayout;
pub use pip_grid::{PRICE_LABEL_INSET_PX, format_price};
pub use render_style::RenderStyle;
