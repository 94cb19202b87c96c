//! candle-plot: candlestick chart plotting.
//!
//! Raw per-period price samples are aggregated into candles, mapped through a
//! data-to-canvas transform, clipped to the plotting area and recorded as an
//! ordered, backend-agnostic render frame.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{CandleChart, CandleChartStyle, CandlePlotConfig, Plot, build_candle_plot};
pub use error::{ChartError, ChartResult};
