pub mod syntax;
pub mod types;
pub mod runtime;
pub mod analysis;
pub mod canvas;
pub mod error;
pub mod storage;

pub use analysis::{check_syntax, ValidationReport, Violation};
pub use canvas::{Canvas, Recorder};
pub use error::{ErrorCode, ErrorKind, ExecutionError, StorageError, SyntaxError};
pub use runtime::interpreter::Interpreter;
pub use runtime::state::InterpreterState;
pub use storage::{FileStore, ProgramStore};
pub use syntax::ast::Instruction;
pub use syntax::parse;
pub use syntax::token::{ArgKind, CommandKind};
pub use types::color::Color;
pub use types::draw::DrawCommand;
pub use types::geometry::{Point, Rect};

// ─── Convenience ──────────────────────────────────────────────────────────────

/// Run `text` against a fresh interpreter drawing into a `Recorder`.
/// Returns what was recorded, even when execution stopped early.
pub fn run_recorded(text: &str) -> (Recorder, Result<(), ExecutionError>) {
    let mut interp = Interpreter::new(Recorder::new());
    let result = interp.execute(text);
    (interp.into_canvas(), result)
}
