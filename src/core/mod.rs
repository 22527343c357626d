pub mod candle;
pub mod primitives;
pub mod types;
pub mod viewport;
pub mod visibility;

pub use candle::{Candle, CandleStore};
pub use types::ScreenSize;
pub use viewport::{ColumnPlacement, PipPricing, PricePlacement, ViewportState};
pub use visibility::{MIN_BODY_HEIGHT_PX, VisibleCandle, visible_candles};
