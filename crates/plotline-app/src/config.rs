//! Start-up settings, taken from the command line.

use std::path::PathBuf;

use clap::Parser;
use plotline_lang::Color;

#[derive(Parser, Debug)]
#[command(author, version, about = "Editor and canvas for the plotline drawing language", long_about = None)]
pub struct Args {
    /// Program file to load at start-up (also the default Load/Save target)
    pub program: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 640)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 480)]
    pub height: u32,

    /// Execute the loaded program right away
    #[arg(long)]
    pub run: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub program_path: PathBuf,
    pub canvas_size: (f32, f32),
    pub background: Color,
    pub run_on_start: bool,
}

impl Config {
    pub const DEFAULT_PROGRAM: &'static str = "program.txt";

    pub fn from_args(args: Args) -> Self {
        let run_on_start = args.run && args.program.is_some();
        Self {
            program_path: args.program.unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PROGRAM)),
            canvas_size: (args.width.max(1) as f32, args.height.max(1) as f32),
            run_on_start,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            program_path: PathBuf::from(Self::DEFAULT_PROGRAM),
            canvas_size: (640.0, 480.0),
            background: Color::WHITE,
            run_on_start: false,
        }
    }
}
