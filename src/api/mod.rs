mod candle_chart;
mod candle_plot;
mod plot;
mod plotter;
mod ticks;

pub use candle_chart::{CandleChart, CandleChartStyle, X_RANGE_PAD_FACTOR};
pub use candle_plot::{CandlePlotConfig, CandleStylePreset, build_candle_plot};
pub use plot::{Axis, Plot};
pub use plotter::{
    AxisTransform, CoordinateTransform, DataRange, DataRanger, FnTransform, Plotter,
};
pub use ticks::{ConstantTicks, DefaultTicks, RawTicks, Tick, Ticker};
