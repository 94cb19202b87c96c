use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{PolygonPrimitive, PolylinePrimitive, TextPrimitive};

/// One draw call, kept in submission order so later commands paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillPolygon(PolygonPrimitive),
    StrokePolyline(PolylinePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            DrawCommand::FillPolygon(polygon) => polygon.validate(),
            DrawCommand::StrokePolyline(polyline) => polyline.validate(),
            DrawCommand::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.commands.push(DrawCommand::FillPolygon(polygon));
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.commands.push(DrawCommand::StrokePolyline(polyline));
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.commands.push(DrawCommand::Text(text));
        self
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.commands.push(DrawCommand::FillPolygon(polygon));
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.commands.push(DrawCommand::StrokePolyline(polyline));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn polygons(&self) -> impl Iterator<Item = &PolygonPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillPolygon(polygon) => Some(polygon),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::StrokePolyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for command in &self.commands {
            command.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
