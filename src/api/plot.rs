use tracing::debug;

use crate::core::{Point, Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, FrameCanvas, LineStyle, PolylinePrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

use super::{
    AxisTransform, ConstantTicks, CoordinateTransform, DefaultTicks, Plotter, Tick, Ticker,
};

const TITLE_FONT_PX: f64 = 16.0;
const AXIS_LABEL_FONT_PX: f64 = 13.0;
const TICK_LABEL_FONT_PX: f64 = 11.0;
const MAJOR_TICK_LEN_PX: f64 = 8.0;
const MINOR_TICK_LEN_PX: f64 = 4.0;
const MARGIN_TOP_PX: f64 = 40.0;
const MARGIN_RIGHT_PX: f64 = 16.0;
const MARGIN_BOTTOM_PX: f64 = 52.0;
const MARGIN_LEFT_PX: f64 = 64.0;

/// One plot axis: caption, range and tick source.
///
/// `min`/`max` start inverted (`+inf`/`-inf`) and grow as plotters with a
/// data range are added; assign them afterwards to override.
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub ticker: Box<dyn Ticker>,
    pub show_line: bool,
    pub show_tick_marks: bool,
    pub style: LineStyle,
}

impl Axis {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: String::new(),
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ticker: Box::new(DefaultTicks),
            show_line: true,
            show_tick_marks: true,
            style: LineStyle::new(Color::BLACK, 1.0),
        }
    }

    pub fn set_ticker(&mut self, ticker: impl Ticker + 'static) {
        self.ticker = Box::new(ticker);
    }

    /// Effective `(min, max)`; an empty span is widened by one unit each way.
    pub fn range(&self) -> ChartResult<(f64, f64)> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(ChartError::InvalidData(format!(
                "axis `{}` has no valid range: min={}, max={}",
                self.label, self.min, self.max
            )));
        }
        if self.min == self.max {
            return Ok((self.min - 1.0, self.max + 1.0));
        }
        Ok((self.min, self.max))
    }

    fn ticks_in_range(&self, (min, max): (f64, f64)) -> Vec<Tick> {
        self.ticker
            .ticks(min, max)
            .into_iter()
            .filter(|tick| tick.value >= min && tick.value <= max)
            .collect()
    }
}

impl Default for Axis {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Axis")
            .field("label", &self.label)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("show_line", &self.show_line)
            .field("show_tick_marks", &self.show_tick_marks)
            .finish_non_exhaustive()
    }
}

/// Composes plotters, axes and captions into one [`RenderFrame`].
///
/// Plotters are drawn in registration order after the axes.
#[derive(Default)]
pub struct Plot {
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    plotters: Vec<Box<dyn Plotter>>,
}

impl std::fmt::Debug for Plot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plot")
            .field("title", &self.title)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("plotters", &self.plotters.len())
            .finish()
    }
}

impl Plot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a plotter and widens the axes to its data range.
    pub fn add(&mut self, plotter: impl Plotter + 'static) {
        self.add_boxed(Box::new(plotter));
    }

    pub fn add_boxed(&mut self, plotter: Box<dyn Plotter>) {
        if let Some(range) = plotter.as_data_ranger().map(|ranger| ranger.data_range()) {
            self.x.min = self.x.min.min(range.x_min);
            self.x.max = self.x.max.max(range.x_max);
            self.y.min = self.y.min.min(range.y_min);
            self.y.max = self.y.max.max(range.y_max);
        }
        self.plotters.push(plotter);
    }

    #[must_use]
    pub fn plotter_count(&self) -> usize {
        self.plotters.len()
    }

    /// Labels X positions `0, 1, ..` with `names` and hides X tick marks and
    /// the X axis line.
    pub fn nominal_x<S: AsRef<str>>(&mut self, names: &[S]) {
        let ticks = names
            .iter()
            .enumerate()
            .map(|(index, name)| Tick::major(index as f64, name.as_ref()))
            .collect();
        self.x.set_ticker(ConstantTicks(ticks));
        self.x.show_line = false;
        self.x.show_tick_marks = false;
    }

    /// Lays out axes and captions, then runs every plotter on the data area.
    pub fn draw(&self, viewport: Viewport) -> ChartResult<RenderFrame> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let area = viewport.bounds().inset(
            MARGIN_LEFT_PX,
            MARGIN_TOP_PX,
            MARGIN_RIGHT_PX,
            MARGIN_BOTTOM_PX,
        );
        if area.width() <= 0.0 || area.height() <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let x_range = self.x.range()?;
        let y_range = self.y.range()?;
        let transform = AxisTransform::new(x_range, y_range, area)?;
        debug!(
            plotters = self.plotters.len(),
            x_min = x_range.0,
            x_max = x_range.1,
            y_min = y_range.0,
            y_max = y_range.1,
            "draw plot"
        );

        let mut frame = RenderFrame::new(viewport);
        self.draw_captions(&mut frame, viewport, area);
        self.draw_x_axis(&mut frame, area, x_range, &transform);
        self.draw_y_axis(&mut frame, area, y_range, &transform);

        let mut canvas = FrameCanvas::new(&mut frame, area);
        for plotter in &self.plotters {
            plotter.plot(&mut canvas, &transform);
        }

        Ok(frame)
    }

    /// Draws the plot and hands the frame to `renderer`.
    pub fn render<R: Renderer>(&self, viewport: Viewport, renderer: &mut R) -> ChartResult<()> {
        let frame = self.draw(viewport)?;
        renderer.render(&frame)
    }

    /// Renders through Cairo and writes a PNG file.
    #[cfg(feature = "cairo-backend")]
    pub fn save_png(
        &self,
        viewport: Viewport,
        path: impl AsRef<std::path::Path>,
    ) -> ChartResult<()> {
        let width = i32::try_from(viewport.width)
            .map_err(|_| ChartError::InvalidData("viewport width exceeds i32".to_owned()))?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| ChartError::InvalidData("viewport height exceeds i32".to_owned()))?;
        let mut renderer = crate::render::CairoRenderer::new(width, height)?;
        self.render(viewport, &mut renderer)?;
        renderer.write_png(path)
    }

    fn draw_captions(&self, frame: &mut RenderFrame, viewport: Viewport, area: Rect) {
        if !self.title.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.title.clone(),
                f64::from(viewport.width) / 2.0,
                MARGIN_TOP_PX / 2.0,
                TITLE_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }
        if !self.x.label.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.x.label.clone(),
                area.min.x + area.width() / 2.0,
                f64::from(viewport.height) - AXIS_LABEL_FONT_PX,
                AXIS_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }
        if !self.y.label.is_empty() {
            frame.push_text(TextPrimitive::new(
                self.y.label.clone(),
                area.min.x,
                area.min.y - AXIS_LABEL_FONT_PX,
                AXIS_LABEL_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
    }

    fn draw_x_axis(
        &self,
        frame: &mut RenderFrame,
        area: Rect,
        range: (f64, f64),
        transform: &AxisTransform,
    ) {
        let baseline = area.max.y;
        if self.x.show_line {
            frame.push_polyline(PolylinePrimitive::segment(
                Point::new(area.min.x, baseline),
                Point::new(area.max.x, baseline),
                self.x.style,
            ));
        }

        let ticks = self.x.ticks_in_range(range);
        for tick in &ticks {
            let x = transform.x(tick.value);
            if self.x.show_tick_marks {
                frame.push_polyline(PolylinePrimitive::segment(
                    Point::new(x, baseline),
                    Point::new(x, baseline + tick_length(tick)),
                    self.x.style,
                ));
            }
            if !tick.is_minor() {
                frame.push_text(TextPrimitive::new(
                    tick.label.clone(),
                    x,
                    baseline + MAJOR_TICK_LEN_PX + TICK_LABEL_FONT_PX,
                    TICK_LABEL_FONT_PX,
                    Color::BLACK,
                    TextHAlign::Center,
                ));
            }
        }
    }

    fn draw_y_axis(
        &self,
        frame: &mut RenderFrame,
        area: Rect,
        range: (f64, f64),
        transform: &AxisTransform,
    ) {
        let baseline = area.min.x;
        if self.y.show_line {
            frame.push_polyline(PolylinePrimitive::segment(
                Point::new(baseline, area.min.y),
                Point::new(baseline, area.max.y),
                self.y.style,
            ));
        }

        let ticks = self.y.ticks_in_range(range);
        for tick in &ticks {
            let y = transform.y(tick.value);
            if self.y.show_tick_marks {
                frame.push_polyline(PolylinePrimitive::segment(
                    Point::new(baseline - tick_length(tick), y),
                    Point::new(baseline, y),
                    self.y.style,
                ));
            }
            if !tick.is_minor() {
                frame.push_text(TextPrimitive::new(
                    tick.label.clone(),
                    baseline - MAJOR_TICK_LEN_PX - 2.0,
                    y,
                    TICK_LABEL_FONT_PX,
                    Color::BLACK,
                    TextHAlign::Right,
                ));
            }
        }
    }
}

fn tick_length(tick: &Tick) -> f64 {
    if tick.is_minor() {
        MINOR_TICK_LEN_PX
    } else {
        MAJOR_TICK_LEN_PX
    }
}
