use crate::core::clip::{clip_lines_y, clip_polygon_y};
use crate::core::{Point, Rect};
use crate::render::{Color, LineStyle, PolygonPrimitive, PolylinePrimitive, RenderFrame};

/// Drawing surface handed to plotters during a draw pass.
///
/// Coordinates are canvas pixels. Clipping helpers restrict shapes to the
/// vertical extent of [`Canvas::bounds`]; horizontal overflow is left to the
/// plot layout.
pub trait Canvas {
    /// Visible plotting area.
    fn bounds(&self) -> Rect;

    /// Fills a closed polygon. Fewer than three points draw nothing.
    fn fill_polygon(&mut self, color: Color, points: &[Point]);

    /// Strokes each polyline. Lines with fewer than two points are skipped.
    fn stroke_lines(&mut self, style: LineStyle, lines: &[Vec<Point>]);

    fn clip_polygon_y(&self, points: &[Point]) -> Vec<Point> {
        let bounds = self.bounds();
        clip_polygon_y(points, bounds.min.y, bounds.max.y)
    }

    fn clip_lines_y(&self, lines: &[&[Point]]) -> Vec<Vec<Point>> {
        let bounds = self.bounds();
        clip_lines_y(lines, bounds.min.y, bounds.max.y)
    }
}

/// Canvas that records draw calls into a [`RenderFrame`].
#[derive(Debug)]
pub struct FrameCanvas<'a> {
    frame: &'a mut RenderFrame,
    bounds: Rect,
}

impl<'a> FrameCanvas<'a> {
    #[must_use]
    pub fn new(frame: &'a mut RenderFrame, bounds: Rect) -> Self {
        Self { frame, bounds }
    }
}

impl Canvas for FrameCanvas<'_> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn fill_polygon(&mut self, color: Color, points: &[Point]) {
        if points.len() < 3 {
            return;
        }
        self.frame
            .push_polygon(PolygonPrimitive::new(points.to_vec(), color));
    }

    fn stroke_lines(&mut self, style: LineStyle, lines: &[Vec<Point>]) {
        for line in lines.iter().filter(|line| line.len() >= 2) {
            self.frame
                .push_polyline(PolylinePrimitive::new(line.clone(), style));
        }
    }
}
