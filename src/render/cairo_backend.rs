use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawCommand, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub polygons_filled: usize,
    pub polylines_stroked: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// Renders offscreen into an image surface through `Renderer::render`, which
/// can then be written out with [`CairoRenderer::write_png`].
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Writes the current surface as a PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::InvalidData(format!("failed to write png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for command in &frame.commands {
            match command {
                DrawCommand::FillPolygon(polygon) => {
                    let mut points = polygon.points.iter();
                    if let Some(first) = points.next() {
                        context.move_to(first.x, first.y);
                    }
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    context.close_path();
                    apply_color(context, polygon.fill_color);
                    context
                        .fill()
                        .map_err(|err| map_backend_error("failed to fill polygon", err))?;
                    stats.polygons_filled += 1;
                }
                DrawCommand::StrokePolyline(polyline) => {
                    let mut points = polyline.points.iter();
                    if let Some(first) = points.next() {
                        context.move_to(first.x, first.y);
                    }
                    for point in points {
                        context.line_to(point.x, point.y);
                    }
                    apply_color(context, polyline.style.color);
                    context.set_line_width(polyline.style.width);
                    context
                        .stroke()
                        .map_err(|err| map_backend_error("failed to stroke polyline", err))?;
                    stats.polylines_stroked += 1;
                }
                DrawCommand::Text(text) => {
                    let layout = pangocairo::functions::create_layout(context);
                    let font_description =
                        FontDescription::from_string(&format!("Sans {}", text.font_size_px));
                    layout.set_font_description(Some(&font_description));
                    layout.set_text(&text.text);

                    let (text_width, text_height) = layout.pixel_size();
                    let x = match text.h_align {
                        TextHAlign::Left => text.x,
                        TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                        TextHAlign::Right => text.x - f64::from(text_width),
                    };

                    apply_color(context, text.color);
                    context.move_to(x, text.y - f64::from(text_height) / 2.0);
                    pangocairo::functions::show_layout(context, &layout);
                    stats.texts_drawn += 1;
                }
            }
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
