use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Calendar granularity of one candle period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    /// Short form used in axis captions.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            TimeUnit::Second => "sec",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "hrs",
            TimeUnit::Day => "day",
            TimeUnit::Month => "mon",
            TimeUnit::Year => "yr",
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    /// `chrono` layout that renders a timestamp truncated to this unit.
    #[must_use]
    pub const fn label_format(self) -> &'static str {
        match self {
            TimeUnit::Second => "%Y-%m-%dT%H:%M:%S",
            TimeUnit::Minute => "%Y-%m-%dT%H:%M",
            TimeUnit::Hour => "%Y-%m-%dT%H",
            TimeUnit::Day => "%Y-%m-%d",
            TimeUnit::Month => "%Y-%m",
            TimeUnit::Year => "%Y",
        }
    }

    /// Resolves a unit name, abbreviation or label layout.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        Self::ALL.into_iter().find(|unit| {
            trimmed.eq_ignore_ascii_case(unit.name())
                || trimmed.eq_ignore_ascii_case(unit.abbreviation())
                || trimmed == unit.label_format()
        })
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ChartError::InvalidData(format!("unknown time unit `{s}`")))
    }
}

/// Abbreviation for a free-form unit string; unknown units map to `""`.
#[must_use]
pub fn unit_abbreviation(unit: &str) -> &'static str {
    TimeUnit::parse(unit).map_or("", TimeUnit::abbreviation)
}

/// Period length used only for axis caption text, e.g. 5 minutes.
///
/// `unit` is kept as the caller's string so an unrecognised unit degrades to
/// an empty abbreviation instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarUnit {
    pub count: u32,
    pub unit: String,
}

impl BarUnit {
    #[must_use]
    pub fn new(count: u32, unit: impl Into<String>) -> Self {
        Self {
            count,
            unit: unit.into(),
        }
    }

    #[must_use]
    pub fn time_unit(&self) -> Option<TimeUnit> {
        TimeUnit::parse(&self.unit)
    }

    #[must_use]
    pub fn abbreviation(&self) -> &'static str {
        unit_abbreviation(&self.unit)
    }

    /// X-axis caption, e.g. `Time [5 min]`.
    #[must_use]
    pub fn axis_label(&self) -> String {
        format!("Time [{} {}]", self.count, self.abbreviation())
    }

    /// Formats a period start as a nominal X label.
    pub fn period_label(&self, time: DateTime<Utc>) -> ChartResult<String> {
        let unit = self.time_unit().ok_or_else(|| {
            ChartError::InvalidData(format!("unknown time unit `{}`", self.unit))
        })?;
        Ok(time.format(unit.label_format()).to_string())
    }
}

impl Default for BarUnit {
    fn default() -> Self {
        Self::new(1, TimeUnit::Minute.name())
    }
}
