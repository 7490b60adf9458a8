pub mod validator;


pub use validator::{ValidationReport, Violation};
use validator::Validator;

/// Check every line of `text` without executing anything. Never stops early:
/// the report lists all bad lines, in order.
pub fn check_syntax(text: &str) -> ValidationReport {
    Validator::new().validate(text)
}
