//! Whole-program syntax check.
//!
//! Parses every line and collects every failure. Nothing is executed, so no
//! pen state changes and no canvas is involved. Unknown color names are a
//! dispatch-time error and therefore do not show up here.

use crate::error::SyntaxError;
use crate::runtime::program;
use crate::syntax::parser::parse;

#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// 1-based, blank lines counted.
    pub line: usize,
    pub error: SyntaxError,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: [{}] {}", self.line, self.error.code(), self.error)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationReport {
    /// Number of non-blank lines looked at.
    pub checked: usize,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool { self.violations.is_empty() }
}

impl std::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            return write!(f, "syntax ok ({} lines)", self.checked);
        }
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 { writeln!(f)?; }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

pub(crate) struct Validator {
    report: ValidationReport,
}

impl Validator {
    pub fn new() -> Self {
        Self { report: ValidationReport::default() }
    }

    pub fn validate(mut self, text: &str) -> ValidationReport {
        for (line, src) in program::lines(text) {
            self.report.checked += 1;
            if let Err(error) = parse(src) {
                self.report.violations.push(Violation { line, error });
            }
        }
        self.report
    }
}
