use crate::types::color::Color;
use crate::types::geometry::Point;

/// Pen-plotter state carried from one instruction to the next.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InterpreterState {
    /// Current pen position. Moved by `moveto`/`drawto`, read by `drawto` and `circle`.
    pub cursor: Point,
    pub pen: Color,
    /// Sticky: every shape drawn after `fill on` is filled until `fill off`.
    pub fill: bool,
}
