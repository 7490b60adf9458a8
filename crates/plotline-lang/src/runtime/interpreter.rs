//! Line-by-line interpreter. Parses each line, updates the pen state and
//! forwards drawing to the owned `Canvas`. Stops at the first error; canvas
//! calls already made are not undone.

use tracing::{debug, info, warn};

use crate::canvas::Canvas;
use crate::error::{ErrorKind, ExecutionError};
use crate::runtime::program;
use crate::runtime::state::InterpreterState;
use crate::syntax::ast::Instruction;
use crate::syntax::parser::parse;
use crate::types::color::Color;
use crate::types::geometry::{Point, Rect};

/// Owns the drawing surface and pen state for one session. The canvas lives
/// exactly as long as the interpreter (or until handed back by `into_canvas`).
pub struct Interpreter<C: Canvas> {
    canvas: C,
    state: InterpreterState,
}

impl<C: Canvas> Interpreter<C> {
    pub fn new(canvas: C) -> Self {
        Self { canvas, state: InterpreterState::default() }
    }

    /// Seed the interpreter with a pen state, e.g. one saved from another session.
    pub fn with_state(mut self, state: InterpreterState) -> Self {
        self.state = state;
        self
    }

    // ─── Entry points ─────────────────────────────────────────────────────────

    /// Run a whole program from a fresh state, stopping at the first bad line.
    pub fn execute(&mut self, text: &str) -> Result<(), ExecutionError> {
        self.reset();
        info!("executing program");

        let mut count = 0usize;
        for (line_no, line) in program::lines(text) {
            self.run_line(line_no, line)?;
            count += 1;
        }

        info!(lines = count, "program finished");
        Ok(())
    }

    /// Run a single command against the current state (interactive entry).
    /// Blank input is a no-op.
    pub fn execute_one(&mut self, line: &str) -> Result<(), ExecutionError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }
        self.run_line(1, line)
    }

    fn run_line(&mut self, line_no: usize, line: &str) -> Result<(), ExecutionError> {
        let result = parse(line)
            .map_err(|e| ExecutionError::new(line_no, e))
            .and_then(|instr| self.dispatch(&instr).map_err(|kind| ExecutionError::new(line_no, kind)));

        if let Err(e) = &result {
            warn!(line = line_no, code = %e.code(), "aborting: {}", e.kind);
        }
        result
    }

    // ─── Dispatch ─────────────────────────────────────────────────────────────

    /// Apply one instruction to the pen state and canvas.
    pub fn dispatch(&mut self, instr: &Instruction) -> Result<(), ErrorKind> {
        debug!(?instr, "dispatch");
        let pen  = self.state.pen;
        let fill = self.state.fill;

        match instr {
            Instruction::MoveTo { x, y } => {
                self.state.cursor = Point::new(*x, *y);
            }
            Instruction::DrawTo { x, y } => {
                let to = Point::new(*x, *y);
                self.canvas.draw_line(self.state.cursor, to, pen);
                self.state.cursor = to;
            }
            Instruction::Clear => self.canvas.clear(),
            Instruction::Rectangle { x, y, width, height } => {
                self.canvas.draw_rectangle(Rect::new(*x, *y, *width, *height), pen, fill);
            }
            Instruction::Circle { radius } => {
                self.canvas.draw_ellipse(Rect::around(self.state.cursor, *radius), pen, fill);
            }
            Instruction::Triangle { points } => {
                let pts = (*points).map(Point::from);
                self.canvas.draw_polygon(&pts, pen, fill);
            }
            Instruction::SetColor { name } => {
                self.state.pen = Color::from_name(name)
                    .ok_or_else(|| ErrorKind::UnknownColor { name: name.clone() })?;
            }
            Instruction::SetFill { enabled } => {
                self.state.fill = *enabled;
            }
        }
        Ok(())
    }

    // ─── State access ─────────────────────────────────────────────────────────

    /// Restore the default pen state. The canvas is left alone.
    pub fn reset(&mut self) {
        self.state = InterpreterState::default();
    }

    pub fn state(&self) -> &InterpreterState { &self.state }

    pub fn cursor(&self) -> Point { self.state.cursor }

    pub fn pen(&self) -> Color { self.state.pen }

    pub fn fill_enabled(&self) -> bool { self.state.fill }

    pub fn canvas(&self) -> &C { &self.canvas }

    pub fn canvas_mut(&mut self) -> &mut C { &mut self.canvas }

    pub fn into_canvas(self) -> C { self.canvas }
}
