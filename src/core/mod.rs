pub mod bar_unit;
pub mod candle;
pub mod candles;
pub mod clip;
pub mod primitives;
pub mod scale;
pub mod types;

pub use bar_unit::{BarUnit, TimeUnit, unit_abbreviation};
pub use candle::{Candle, CandleDirection, aggregate};
pub use candles::Candles;
pub use scale::LinearScale;
pub use types::{Point, Rect, Viewport};
