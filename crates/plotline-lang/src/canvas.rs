//! The drawing surface the interpreter talks to, plus a recording implementation.
//!
//! Implementations rasterize (or otherwise consume) primitive shapes. The
//! interpreter only ever passes absolute coordinates together with the pen
//! color and fill flag current at the time of the call.

use crate::types::color::Color;
use crate::types::draw::DrawCommand;
use crate::types::geometry::{Point, Rect};

pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, color: Color);
    fn draw_rectangle(&mut self, rect: Rect, color: Color, filled: bool);
    fn draw_ellipse(&mut self, bounds: Rect, color: Color, filled: bool);
    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool);
    fn clear(&mut self);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) { (**self).draw_line(from, to, color) }
    fn draw_rectangle(&mut self, rect: Rect, color: Color, filled: bool) { (**self).draw_rectangle(rect, color, filled) }
    fn draw_ellipse(&mut self, bounds: Rect, color: Color, filled: bool) { (**self).draw_ellipse(bounds, color, filled) }
    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) { (**self).draw_polygon(points, color, filled) }
    fn clear(&mut self) { (**self).clear() }
}

impl<C: Canvas + ?Sized> Canvas for Box<C> {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) { (**self).draw_line(from, to, color) }
    fn draw_rectangle(&mut self, rect: Rect, color: Color, filled: bool) { (**self).draw_rectangle(rect, color, filled) }
    fn draw_ellipse(&mut self, bounds: Rect, color: Color, filled: bool) { (**self).draw_ellipse(bounds, color, filled) }
    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) { (**self).draw_polygon(points, color, filled) }
    fn clear(&mut self) { (**self).clear() }
}

// ─── Recorder ─────────────────────────────────────────────────────────────────

/// Canvas that keeps every call as a `DrawCommand`, in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self { Self::default() }

    /// Every call received so far, `Clear` entries included.
    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    /// Commands drawn since the most recent `clear`, i.e. what the surface shows.
    pub fn visible(&self) -> &[DrawCommand] {
        let start = self.commands.iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .map_or(0, |i| i + 1);
        &self.commands[start..]
    }

    pub fn take(&mut self) -> Vec<DrawCommand> { std::mem::take(&mut self.commands) }

    /// Drop everything before the most recent `Clear`. The `Clear` itself stays.
    /// Returns how many commands were dropped.
    pub fn trim_hidden(&mut self) -> usize {
        let cut = self.commands.iter()
            .rposition(|c| matches!(c, DrawCommand::Clear))
            .unwrap_or(0);
        self.commands.drain(..cut);
        cut
    }

    pub fn len(&self) -> usize { self.commands.len() }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }
}

impl Canvas for Recorder {
    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn draw_rectangle(&mut self, rect: Rect, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Rectangle { rect, color, filled });
    }

    fn draw_ellipse(&mut self, bounds: Rect, color: Color, filled: bool) {
        self.commands.push(DrawCommand::Ellipse { bounds, color, filled });
    }

    fn draw_polygon(&mut self, points: &[Point], color: Color, filled: bool) {
        self.commands.push(DrawCommand::Polygon { points: points.to_vec(), color, filled });
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }
}
