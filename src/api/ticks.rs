use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::warn;

const SUGGESTED_MAJOR_TICKS: f64 = 3.0;

/// Axis tick. An empty label marks a minor tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn major(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn minor(value: f64) -> Self {
        Self {
            value,
            label: String::new(),
        }
    }

    #[must_use]
    pub fn is_minor(&self) -> bool {
        self.label.is_empty()
    }
}

/// Source of tick marks for an axis range.
pub trait Ticker {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick>;
}

impl<F> Ticker for F
where
    F: Fn(f64, f64) -> Vec<Tick>,
{
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        self(min, max)
    }
}

/// Nice-number tick generator.
///
/// Picks a major step of `m * 10^k` giving roughly three labelled ticks and
/// fills in unlabelled minor ticks at a half, third or fifth of that step.
/// Labels always carry at least one decimal (`"10.0"`, `"0.25"`). Output is
/// sorted by value.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTicks;

impl Ticker for DefaultTicks {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }

        let span = max - min;
        if !span.is_finite() {
            return Vec::new();
        }
        if span == 0.0 {
            return vec![Tick::major(min, format_decimal(min, 1))];
        }

        let mut tens = 10_f64.powf(span.log10().floor());
        let mut steps = span / tens;
        while steps < SUGGESTED_MAJOR_TICKS {
            tens /= 10.0;
            steps = span / tens;
        }

        let major_mult = match (steps / SUGGESTED_MAJOR_TICKS) as u32 {
            7 => 6,
            9 => 8,
            mult => mult.max(1),
        };
        let major_delta = f64::from(major_mult) * tens;
        let precision = precision_of(major_delta);
        let minor_delta = match major_mult {
            3 | 6 => major_delta / 3.0,
            5 => major_delta / 5.0,
            _ => major_delta / 2.0,
        };

        let key_precision = precision + 3;
        let mut ticks: IndexMap<OrderedFloat<f64>, Tick> = IndexMap::new();
        for value in stepped_values(min, max, major_delta) {
            let value = round_to(value, key_precision);
            ticks.insert(
                OrderedFloat(value),
                Tick::major(value, format_decimal(value, precision.max(1))),
            );
        }
        for value in stepped_values(min, max, minor_delta) {
            let value = round_to(value, key_precision);
            ticks
                .entry(OrderedFloat(value))
                .or_insert_with(|| Tick::minor(value));
        }

        ticks.sort_keys();
        ticks.into_values().collect()
    }
}

/// Fixed ticks returned regardless of the requested range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantTicks(pub Vec<Tick>);

impl Ticker for ConstantTicks {
    fn ticks(&self, _min: f64, _max: f64) -> Vec<Tick> {
        self.0.clone()
    }
}

/// Rewrites labelled ticks of an inner generator as whole numbers.
///
/// `"3.0"` becomes `"3"`; minor ticks pass through untouched. A label that
/// does not parse as a number is kept as is and reported through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawTicks<T = DefaultTicks> {
    inner: T,
}

impl<T: Ticker> RawTicks<T> {
    #[must_use]
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T: Ticker> Ticker for RawTicks<T> {
    fn ticks(&self, min: f64, max: f64) -> Vec<Tick> {
        let mut ticks = self.inner.ticks(min, max);
        for tick in ticks.iter_mut().filter(|tick| !tick.is_minor()) {
            match tick.label.trim().parse::<f64>() {
                Ok(value) => tick.label = format_decimal(value, 0),
                Err(err) => {
                    warn!(label = %tick.label, value = tick.value, %err, "tick label is not numeric; keeping it");
                }
            }
        }
        ticks
    }
}

fn stepped_values(min: f64, max: f64, delta: f64) -> impl Iterator<Item = f64> {
    let first = (min / delta).floor();
    (0_u32..)
        .map(move |step| (first + f64::from(step)) * delta)
        .take_while(move |value| *value <= max + delta * 1e-9)
        .filter(move |value| *value >= min - delta * 1e-9)
}

fn precision_of(delta: f64) -> usize {
    let digits = -delta.log10().floor();
    if digits > 0.0 { digits as usize } else { 0 }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10_f64.powi(decimals.min(300) as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value + 0.0;
    }
    // `+ 0.0` folds negative zero into zero.
    scaled.round() / factor + 0.0
}

fn format_decimal(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}
