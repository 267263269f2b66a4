//! A recording draw surface.
//!
//! Stands in for a real backend in tests and headless runs: chart models
//! draw into it, and assertions inspect the recorded commands.

use sortviz_core::{Brush, Color, CornerRadius, DrawContext, Point, Rect, TextStyle};

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        radius: CornerRadius,
        color: Color,
    },
    DrawText {
        text: String,
        position: Point,
        size: f32,
        color: Color,
    },
}

/// A `DrawContext` that records instead of rasterizing.
#[derive(Debug, Default)]
pub struct PaintRecorder {
    commands: Vec<PaintCommand>,
}

impl PaintRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All filled rects of the given color, in draw order.
    pub fn rects_with_color(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::FillRect { rect, color: c, .. } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PaintCommand::FillRect { .. }))
            .count()
    }
}

impl DrawContext for PaintRecorder {
    fn fill_rect(&mut self, rect: Rect, radius: CornerRadius, brush: Brush) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            radius,
            color: brush.color(),
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(PaintCommand::DrawText {
            text: text.to_string(),
            position,
            size: style.size,
            color: style.color,
        });
    }
}
