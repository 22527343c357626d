//! pip-chart: viewport coordinate engine for pip-grid candlestick charts.
//!
//! The chart is a grid: every column is one candle, every row is one pip of
//! price. This crate maps between candle/pip indices, a scrollable and
//! zoomable viewport, and screen pixels, then emits backend-agnostic draw
//! requests for a host renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
