use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{BarUnit, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{CandleChart, CandleChartStyle, DefaultTicks, Plot, RawTicks};

/// Named entry of the candle style preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CandleStylePreset {
    #[default]
    Classic,
    MonochromeDark,
}

impl CandleStylePreset {
    #[must_use]
    pub fn style(self) -> CandleChartStyle {
        match self {
            CandleStylePreset::Classic => CandleChartStyle::classic(),
            CandleStylePreset::MonochromeDark => CandleChartStyle::monochrome_dark(),
        }
    }
}

/// Serializable setup for [`build_candle_plot`].
///
/// Every field has a default so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandlePlotConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_price_unit")]
    pub price_unit: String,
    #[serde(default)]
    pub bar_unit: BarUnit,
    /// Left edge of the X axis, overriding the data range.
    #[serde(default = "default_x_min")]
    pub x_min: f64,
    /// Right edge of the X axis as a multiple of the period count.
    #[serde(default = "default_x_max_factor")]
    pub x_max_factor: f64,
    #[serde(default)]
    pub style: CandleStylePreset,
}

impl Default for CandlePlotConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            title: default_title(),
            price_unit: default_price_unit(),
            bar_unit: BarUnit::default(),
            x_min: default_x_min(),
            x_max_factor: default_x_max_factor(),
            style: CandleStylePreset::default(),
        }
    }
}

impl CandlePlotConfig {
    #[must_use]
    pub fn with_bar_unit(mut self, bar_unit: BarUnit) -> Self {
        self.bar_unit = bar_unit;
        self
    }

    #[must_use]
    pub fn with_price_unit(mut self, price_unit: impl Into<String>) -> Self {
        self.price_unit = price_unit.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: CandleStylePreset) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse candle plot config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize candle plot config: {e}"))
        })
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.x_min.is_finite() {
            return Err(ChartError::InvalidData("x_min must be finite".to_owned()));
        }
        if !self.x_max_factor.is_finite() || self.x_max_factor <= 0.0 {
            return Err(ChartError::InvalidData(
                "x_max_factor must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Y-axis caption, e.g. `Price [yen]`.
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("Price [{}]", self.price_unit)
    }
}

/// Builds a ready-to-draw candle chart plot.
///
/// `labels` name each period on the X axis and must match `periods` in
/// length. The Y axis uses whole-number tick labels.
pub fn build_candle_plot<L, P>(
    labels: &[L],
    periods: &[P],
    config: &CandlePlotConfig,
) -> ChartResult<Plot>
where
    L: AsRef<str>,
    P: AsRef<[f64]> + Sync,
{
    let config = config.clone().validate()?;
    if labels.len() != periods.len() {
        return Err(ChartError::InvalidData(format!(
            "expected {} period labels, got {}",
            periods.len(),
            labels.len()
        )));
    }

    let chart = CandleChart::from_periods(periods, config.style.style())?;

    let mut plot = Plot::new();
    plot.add(chart);
    plot.title = config.title.clone();
    plot.x.label = config.bar_unit.axis_label();
    plot.y.label = config.price_label();
    plot.y.set_ticker(RawTicks::new(DefaultTicks));
    plot.nominal_x(labels);
    plot.x.min = config.x_min;
    plot.x.max = periods.len() as f64 * config.x_max_factor;

    debug!(
        periods = periods.len(),
        x_min = plot.x.min,
        x_max = plot.x.max,
        "built candle plot"
    );
    Ok(plot)
}

fn default_viewport() -> Viewport {
    Viewport::new(960, 576)
}

fn default_title() -> String {
    "Candle Chart".to_owned()
}

fn default_price_unit() -> String {
    "yen".to_owned()
}

fn default_x_min() -> f64 {
    -0.5
}

fn default_x_max_factor() -> f64 {
    1.1
}
