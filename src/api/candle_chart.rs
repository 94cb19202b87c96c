use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::core::{CandleDirection, Candles, Point};
use crate::error::ChartResult;
use crate::render::{Canvas, Color, LineStyle};

use super::{CoordinateTransform, DataRange, DataRanger, Plotter};

/// Right-hand padding of the reported X range, as a multiple of the candle
/// count.
pub const X_RANGE_PAD_FACTOR: f64 = 1.3;

/// Colors and strokes for candle bodies and whiskers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleChartStyle {
    pub up_fill: Color,
    pub down_fill: Color,
    pub body_outline: LineStyle,
    pub whisker: LineStyle,
}

impl CandleChartStyle {
    /// Hollow white up candles, solid black down candles, black 1px strokes.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            up_fill: Color::WHITE,
            down_fill: Color::BLACK,
            body_outline: LineStyle::new(Color::BLACK, 1.0),
            whisker: LineStyle::new(Color::BLACK, 1.0),
        }
    }

    /// Light-on-dark variant for dark backgrounds.
    #[must_use]
    pub const fn monochrome_dark() -> Self {
        let ink = Color::rgb(0.85, 0.85, 0.85);
        Self {
            up_fill: Color::rgb(0.12, 0.12, 0.12),
            down_fill: ink,
            body_outline: LineStyle::new(ink, 1.0),
            whisker: LineStyle::new(ink, 1.0),
        }
    }

    #[must_use]
    pub fn fill_for(&self, direction: CandleDirection) -> Color {
        match direction {
            CandleDirection::Up => self.up_fill,
            CandleDirection::Down => self.down_fill,
        }
    }
}

impl Default for CandleChartStyle {
    fn default() -> Self {
        Self::classic()
    }
}

/// Candlestick plotter over an owned candle collection.
///
/// Candles are assumed to be uniformly spaced: the body width is the canvas
/// distance between the first two positions and is reused for every candle.
#[derive(Debug, Clone, PartialEq)]
pub struct CandleChart {
    candles: Candles,
    style: CandleChartStyle,
}

impl CandleChart {
    #[must_use]
    pub fn new(candles: Candles, style: CandleChartStyle) -> Self {
        Self { candles, style }
    }

    /// Aggregates raw per-period samples and wraps them in a chart.
    pub fn from_periods<P>(periods: &[P], style: CandleChartStyle) -> ChartResult<Self>
    where
        P: AsRef<[f64]> + Sync,
    {
        Ok(Self::new(Candles::build(periods)?, style))
    }

    #[must_use]
    pub fn candles(&self) -> &Candles {
        &self.candles
    }

    #[must_use]
    pub fn style(&self) -> CandleChartStyle {
        self.style
    }

    pub fn set_style(&mut self, style: CandleChartStyle) {
        self.style = style;
    }

    /// Draws bodies and whiskers clipped to the canvas' vertical extent.
    ///
    /// Per candle the order is body fill, body outline, whiskers. Fewer than
    /// two candles draw nothing.
    pub fn render(&self, canvas: &mut dyn Canvas, transform: &dyn CoordinateTransform) {
        let candles = self.candles.as_slice();
        let [first, second, ..] = candles else {
            trace!(count = candles.len(), "skip candle render: need two candles");
            return;
        };

        let width = transform.x(second.position()) - transform.x(first.position());
        let half = width / 2.0;
        let seam = self.style.body_outline.width / 2.0;
        trace!(count = candles.len(), width, "render candles");

        for candle in candles {
            let x = transform.x(candle.position());
            let low_y = transform.y(candle.low());
            let high_y = transform.y(candle.high());
            let body_top = transform.y(candle.body_high());
            let body_bottom = transform.y(candle.body_low());

            // The closing point overshoots by half a stroke to hide the seam.
            let outline: SmallVec<[Point; 5]> = smallvec![
                Point::new(x - half, body_bottom),
                Point::new(x - half, body_top),
                Point::new(x + half, body_top),
                Point::new(x + half, body_bottom),
                Point::new(x - half - seam, body_bottom),
            ];

            let body = canvas.clip_polygon_y(&outline);
            canvas.fill_polygon(self.style.fill_for(candle.direction()), &body);

            let outline_paths = canvas.clip_lines_y(&[outline.as_slice()]);
            canvas.stroke_lines(self.style.body_outline, &outline_paths);

            let upper = [Point::new(x, body_top), Point::new(x, high_y)];
            let upper_cap = [Point::new(x, high_y), Point::new(x, high_y)];
            let lower = [Point::new(x, body_bottom), Point::new(x, low_y)];
            let lower_cap = [Point::new(x, low_y), Point::new(x, low_y)];
            let whiskers = canvas.clip_lines_y(&[
                upper.as_slice(),
                upper_cap.as_slice(),
                lower.as_slice(),
                lower_cap.as_slice(),
            ]);
            canvas.stroke_lines(self.style.whisker, &whiskers);
        }
    }
}

impl DataRanger for CandleChart {
    fn data_range(&self) -> DataRange {
        DataRange::new(
            0.0,
            self.candles.len() as f64 * X_RANGE_PAD_FACTOR,
            self.candles.global_low(),
            self.candles.global_high(),
        )
    }
}

impl Plotter for CandleChart {
    fn plot(&self, canvas: &mut dyn Canvas, transform: &dyn CoordinateTransform) {
        self.render(canvas, transform);
    }

    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        Some(self)
    }
}
