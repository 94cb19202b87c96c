use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_polygon_count: usize,
    pub last_polyline_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_polygon_count = frame.polygons().count();
        self.last_polyline_count = frame.polylines().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
