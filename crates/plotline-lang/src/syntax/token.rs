/// Argument types a command can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Float,
    ColorName,
    Toggle, // on | off
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    MoveTo,
    DrawTo,
    Clear,
    Rectangle,
    Circle,
    Triangle,
    Color,
    Fill,
}

use ArgKind::{ColorName, Float, Toggle};

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        Self::MoveTo, Self::DrawTo, Self::Clear, Self::Rectangle,
        Self::Circle, Self::Triangle, Self::Color, Self::Fill,
    ];

    /// Grammar table: expected argument types, in order. Arity is the length.
    pub fn signature(self) -> &'static [ArgKind] {
        match self {
            Self::MoveTo    => &[Float, Float],
            Self::DrawTo    => &[Float, Float],
            Self::Clear     => &[],
            Self::Rectangle => &[Float, Float, Float, Float],
            Self::Circle    => &[Float],
            Self::Triangle  => &[Float, Float, Float, Float, Float, Float],
            Self::Color     => &[ColorName],
            Self::Fill      => &[Toggle],
        }
    }

    pub fn arity(self) -> usize { self.signature().len() }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::MoveTo    => "moveto",
            Self::DrawTo    => "drawto",
            Self::Clear     => "clear",
            Self::Rectangle => "rectangle",
            Self::Circle    => "circle",
            Self::Triangle  => "triangle",
            Self::Color     => "color",
            Self::Fill      => "fill",
        }
    }

    /// Case-insensitive keyword lookup.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword().eq_ignore_ascii_case(word))
    }

    /// Human-readable usage line, e.g. `rectangle x y width height`.
    pub fn usage(self) -> &'static str {
        match self {
            Self::MoveTo    => "moveto x y",
            Self::DrawTo    => "drawto x y",
            Self::Clear     => "clear",
            Self::Rectangle => "rectangle x y width height",
            Self::Circle    => "circle radius",
            Self::Triangle  => "triangle x1 y1 x2 y2 x3 y3",
            Self::Color     => "color name",
            Self::Fill      => "fill on|off",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Words accepted for a `Toggle` argument.
pub fn toggle_value(word: &str) -> Option<bool> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "true" | "1"   => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}

