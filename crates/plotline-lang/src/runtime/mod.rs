pub mod interpreter;
pub mod program;
pub mod state;
