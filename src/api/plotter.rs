use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::render::Canvas;

/// Data-space bounding box reported to axis autoscaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataRange {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRange {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }
}

/// Anything that can report the extent of its data.
pub trait DataRanger {
    fn data_range(&self) -> DataRange;
}

/// Maps data-space values onto canvas coordinates.
///
/// X and Y are independent so plotters can place points axis by axis.
pub trait CoordinateTransform {
    fn x(&self, value: f64) -> f64;
    fn y(&self, value: f64) -> f64;
}

/// Component drawn by a [`crate::api::Plot`] during its draw pass.
pub trait Plotter {
    fn plot(&self, canvas: &mut dyn Canvas, transform: &dyn CoordinateTransform);

    /// Range participating in axis autoscaling, if any.
    fn as_data_ranger(&self) -> Option<&dyn DataRanger> {
        None
    }
}

/// Linear axis ranges mapped onto a canvas rectangle.
///
/// Larger Y values land higher on screen (smaller pixel Y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransform {
    x_scale: LinearScale,
    y_scale: LinearScale,
    area: Rect,
}

impl AxisTransform {
    pub fn new(x_range: (f64, f64), y_range: (f64, f64), area: Rect) -> ChartResult<Self> {
        if !(area.width() > 0.0 && area.height() > 0.0) {
            return Err(ChartError::InvalidData(
                "transform area must have a positive size".to_owned(),
            ));
        }
        Ok(Self {
            x_scale: LinearScale::new(x_range.0, x_range.1)?,
            y_scale: LinearScale::new(y_range.0, y_range.1)?,
            area,
        })
    }

    #[must_use]
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Maps a canvas point back to `(x, y)` data values.
    #[must_use]
    pub fn invert(&self, point: Point) -> (f64, f64) {
        (
            self.x_scale
                .range_to_domain(point.x, (self.area.min.x, self.area.max.x)),
            self.y_scale
                .range_to_domain(point.y, (self.area.max.y, self.area.min.y)),
        )
    }
}

impl CoordinateTransform for AxisTransform {
    fn x(&self, value: f64) -> f64 {
        self.x_scale
            .domain_to_range(value, (self.area.min.x, self.area.max.x))
    }

    fn y(&self, value: f64) -> f64 {
        self.y_scale
            .domain_to_range(value, (self.area.max.y, self.area.min.y))
    }
}

/// Transform built from two plain functions.
#[derive(Debug, Clone, Copy)]
pub struct FnTransform<X, Y> {
    x: X,
    y: Y,
}

impl<X, Y> FnTransform<X, Y>
where
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    #[must_use]
    pub fn new(x: X, y: Y) -> Self {
        Self { x, y }
    }
}

impl<X, Y> CoordinateTransform for FnTransform<X, Y>
where
    X: Fn(f64) -> f64,
    Y: Fn(f64) -> f64,
{
    fn x(&self, value: f64) -> f64 {
        (self.x)(value)
    }

    fn y(&self, value: f64) -> f64 {
        (self.y)(value)
    }
}
