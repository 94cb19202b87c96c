mod canvas;
mod frame;
mod null_renderer;
mod primitives;

pub use canvas::{Canvas, FrameCanvas};
pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LineStyle, PolygonPrimitive, PolylinePrimitive, TextHAlign, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, ordered `RenderFrame` so drawing
/// code remains isolated from chart domain logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
