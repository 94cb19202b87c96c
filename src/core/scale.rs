use crate::error::{ChartError, ChartResult};

/// Affine map from a data domain onto a canvas interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` so that `domain_start -> range.0` and `domain_end -> range.1`.
    ///
    /// Values outside the domain extrapolate linearly; clipping is the
    /// canvas' job.
    #[must_use]
    pub fn domain_to_range(self, value: f64, range: (f64, f64)) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        range.0 + normalized * (range.1 - range.0)
    }

    /// Inverse of [`LinearScale::domain_to_range`].
    #[must_use]
    pub fn range_to_domain(self, pixel: f64, range: (f64, f64)) -> f64 {
        let range_span = range.1 - range.0;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - range.0) / range_span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}
