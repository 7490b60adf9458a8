use crate::syntax::token::CommandKind;

/// One validated command line. Holds parsed values only, never the raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    MoveTo { x: f64, y: f64 },
    DrawTo { x: f64, y: f64 },
    Clear,
    Rectangle { x: f64, y: f64, width: f64, height: f64 },
    Circle { radius: f64 },
    Triangle { points: [(f64, f64); 3] },
    /// Name is lowercased; whether it names a known color is decided at dispatch.
    SetColor { name: String },
    SetFill { enabled: bool },
}

impl Instruction {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::MoveTo { .. }    => CommandKind::MoveTo,
            Self::DrawTo { .. }    => CommandKind::DrawTo,
            Self::Clear            => CommandKind::Clear,
            Self::Rectangle { .. } => CommandKind::Rectangle,
            Self::Circle { .. }    => CommandKind::Circle,
            Self::Triangle { .. }  => CommandKind::Triangle,
            Self::SetColor { .. }  => CommandKind::Color,
            Self::SetFill { .. }   => CommandKind::Fill,
        }
    }

    /// True for instructions that read the fill flag.
    pub fn is_shape(&self) -> bool {
        matches!(self, Self::Rectangle { .. } | Self::Circle { .. } | Self::Triangle { .. })
    }
}
