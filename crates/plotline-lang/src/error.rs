use thiserror::Error;

use crate::syntax::token::CommandKind;

/// Error codes prefixed by phase: P = parse (per line), R = runtime (dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Parse
    P001, // unknown command
    P002, // wrong argument count
    P003, // argument not parseable as its expected type
    P004, // empty line

    // Runtime
    R001, // unknown color name
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P001 => "P001",
            Self::P002 => "P002",
            Self::P003 => "P003",
            Self::P004 => "P004",
            Self::R001 => "R001",
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::P001 | Self::P002 | Self::P003 | Self::P004)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Syntax errors ────────────────────────────────────────────────────────────

/// A single line failed tokenizing/validation. Carries no line number; the
/// caller knows which line it fed in.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("unknown command `{name}`")]
    UnknownCommand { name: String },

    #[error("`{command}` expects {expected} argument(s), got {found}")]
    ArityMismatch { command: CommandKind, expected: usize, found: usize },

    #[error("`{command}` argument {} is invalid: `{raw}`", .index + 1)]
    InvalidArgument { command: CommandKind, index: usize, raw: String },

    #[error("empty line")]
    EmptyLine,
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownCommand { .. } => ErrorCode::P001,
            Self::ArityMismatch { .. }  => ErrorCode::P002,
            Self::InvalidArgument { .. } => ErrorCode::P003,
            Self::EmptyLine              => ErrorCode::P004,
        }
    }
}

// ─── Execution errors ─────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("unknown color `{name}`")]
    UnknownColor { name: String },
}

impl ErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Syntax(e)          => e.code(),
            Self::UnknownColor { .. } => ErrorCode::R001,
        }
    }
}

/// First failure of `execute` / `execute_one`. `line` is 1-based and counts
/// blank lines, so it matches what an editor shows.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("[{}] line {line} — {kind}", .kind.code())]
pub struct ExecutionError {
    pub line: usize,
    pub kind: ErrorKind,
}

impl ExecutionError {
    pub fn new(line: usize, kind: impl Into<ErrorKind>) -> Self {
        Self { line, kind: kind.into() }
    }

    pub fn code(&self) -> ErrorCode { self.kind.code() }

    pub fn syntax(&self) -> Option<&SyntaxError> {
        match &self.kind {
            ErrorKind::Syntax(e) => Some(e),
            _ => None,
        }
    }
}

// ─── Storage errors ───────────────────────────────────────────────────────────

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("could not read `{path}`: {source}")]
    Read { path: String, #[source] source: std::io::Error },

    #[error("could not write `{path}`: {source}")]
    Write { path: String, #[source] source: std::io::Error },
}
