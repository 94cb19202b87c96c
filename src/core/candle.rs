use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};

/// Price movement over one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandleDirection {
    /// `close >= open`; drawn hollow.
    Up,
    /// `open > close`; drawn solid.
    Down,
}

/// Open/close/low/high summary of one period's price samples.
///
/// Every instance satisfies `low <= min(open, close)` and
/// `high >= max(open, close)`: [`aggregate`] derives it from the samples and
/// deserialization rejects documents that break it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCandle")]
pub struct Candle {
    position: f64,
    open: f64,
    close: f64,
    low: f64,
    high: f64,
}

impl Candle {
    /// Same as [`aggregate`].
    pub fn new(position: f64, samples: &[f64]) -> ChartResult<Self> {
        aggregate(position, samples)
    }

    /// Aggregates strongly-typed decimal samples.
    pub fn from_decimal_samples(position: f64, samples: &[Decimal]) -> ChartResult<Self> {
        let converted = samples
            .iter()
            .map(|sample| decimal_to_f64(*sample, "sample"))
            .collect::<ChartResult<Vec<_>>>()?;
        aggregate(position, &converted)
    }

    /// Ordinal location along the time axis.
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn open(&self) -> f64 {
        self.open
    }

    #[must_use]
    pub fn close(&self) -> f64 {
        self.close
    }

    #[must_use]
    pub fn low(&self) -> f64 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f64 {
        self.high
    }

    #[must_use]
    pub fn direction(&self) -> CandleDirection {
        if self.open > self.close {
            CandleDirection::Down
        } else {
            CandleDirection::Up
        }
    }

    /// Upper edge of the body in price units.
    #[must_use]
    pub fn body_high(&self) -> f64 {
        self.open.max(self.close)
    }

    /// Lower edge of the body in price units.
    #[must_use]
    pub fn body_low(&self) -> f64 {
        self.open.min(self.close)
    }
}

#[derive(Deserialize)]
struct RawCandle {
    position: f64,
    open: f64,
    close: f64,
    low: f64,
    high: f64,
}

impl TryFrom<RawCandle> for Candle {
    type Error = ChartError;

    fn try_from(raw: RawCandle) -> ChartResult<Self> {
        let RawCandle {
            position,
            open,
            close,
            low,
            high,
        } = raw;
        if ![position, open, close, low, high].iter().all(|v| v.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "candle at position {position} has non-finite fields"
            )));
        }
        if low > open.min(close) || high < open.max(close) {
            return Err(ChartError::InvalidData(format!(
                "candle at position {position} violates low <= open/close <= high: \
                 open={open}, close={close}, low={low}, high={high}"
            )));
        }
        Ok(Self {
            position,
            open,
            close,
            low,
            high,
        })
    }
}

/// Reduces one period's samples into a [`Candle`] placed at `position`.
///
/// The first sample opens the period and the last one closes it.
pub fn aggregate(position: f64, samples: &[f64]) -> ChartResult<Candle> {
    let (Some(&open), Some(&close)) = (samples.first(), samples.last()) else {
        return Err(ChartError::EmptyInput(format!(
            "period at position {position} has no samples"
        )));
    };

    let (low, high) = samples
        .iter()
        .fold((open, open), |(low, high), &sample| {
            (low.min(sample), high.max(sample))
        });

    Ok(Candle {
        position,
        open,
        close,
        low,
        high,
    })
}
