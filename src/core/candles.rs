use serde::Serialize;
use tracing::debug;

#[cfg(feature = "parallel-aggregation")]
use rayon::prelude::*;

use crate::core::candle::{Candle, aggregate};
use crate::error::{ChartError, ChartResult};

/// Ordered, non-empty sequence of candles with cached price extremes.
///
/// Insertion order is the time-axis order. The collection is immutable once
/// built, so it can be shared read-only across threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candles {
    candles: Vec<Candle>,
    global_low: f64,
    global_high: f64,
}

impl Candles {
    /// Aggregates each period into a candle at position `i as f64`.
    ///
    /// Fails with [`ChartError::EmptyInput`] when `periods` is empty or on the
    /// first period without samples.
    pub fn build<P>(periods: &[P]) -> ChartResult<Self>
    where
        P: AsRef<[f64]> + Sync,
    {
        if periods.is_empty() {
            return Err(ChartError::EmptyInput(
                "candle collection needs at least one period".to_owned(),
            ));
        }

        let candles = aggregate_periods(periods)?;
        Self::from_candles(candles)
    }

    /// Wraps already aggregated candles, deriving the global extremes.
    pub fn from_candles(candles: Vec<Candle>) -> ChartResult<Self> {
        let Some(first) = candles.first() else {
            return Err(ChartError::EmptyInput(
                "candle collection needs at least one candle".to_owned(),
            ));
        };

        let (global_low, global_high) = candles
            .iter()
            .fold((first.low(), first.high()), |(low, high), candle| {
                (low.min(candle.low()), high.max(candle.high()))
            });

        debug!(
            count = candles.len(),
            global_low, global_high, "built candle collection"
        );

        Ok(Self {
            candles,
            global_low,
            global_high,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Candle] {
        &self.candles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Candle> {
        self.candles.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Candle> {
        self.candles.get(index)
    }

    /// Lowest `low` across all candles.
    #[must_use]
    pub fn global_low(&self) -> f64 {
        self.global_low
    }

    /// Highest `high` across all candles.
    #[must_use]
    pub fn global_high(&self) -> f64 {
        self.global_high
    }
}

impl<'a> IntoIterator for &'a Candles {
    type Item = &'a Candle;
    type IntoIter = std::slice::Iter<'a, Candle>;

    fn into_iter(self) -> Self::IntoIter {
        self.candles.iter()
    }
}

#[cfg(not(feature = "parallel-aggregation"))]
fn aggregate_periods<P>(periods: &[P]) -> ChartResult<Vec<Candle>>
where
    P: AsRef<[f64]> + Sync,
{
    periods
        .iter()
        .enumerate()
        .map(|(index, samples)| aggregate(index as f64, samples.as_ref()))
        .collect()
}

#[cfg(feature = "parallel-aggregation")]
fn aggregate_periods<P>(periods: &[P]) -> ChartResult<Vec<Candle>>
where
    P: AsRef<[f64]> + Sync,
{
    // Indexed collection keeps order, and the sequential fold below reports
    // the lowest failing period like the single-threaded path does.
    let projected: Vec<ChartResult<Candle>> = periods
        .par_iter()
        .enumerate()
        .map(|(index, samples)| aggregate(index as f64, samples.as_ref()))
        .collect();
    projected.into_iter().collect()
}
