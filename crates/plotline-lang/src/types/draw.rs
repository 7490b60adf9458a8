use crate::types::color::Color;
use crate::types::geometry::{Point, Rect};

/// One canvas call, captured as a value. Coordinates are absolute; pen color
/// and fill state are snapshotted at the time of the call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line      { from: Point, to: Point, color: Color },
    Rectangle { rect: Rect, color: Color, filled: bool },
    Ellipse   { bounds: Rect, color: Color, filled: bool },
    Polygon   { points: Vec<Point>, color: Color, filled: bool },
    Clear,
}

impl DrawCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line { .. }      => "line",
            Self::Rectangle { .. } => "rectangle",
            Self::Ellipse { .. }   => "ellipse",
            Self::Polygon { .. }   => "polygon",
            Self::Clear            => "clear",
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Line { color, .. }
            | Self::Rectangle { color, .. }
            | Self::Ellipse { color, .. }
            | Self::Polygon { color, .. } => Some(*color),
            Self::Clear => None,
        }
    }

    pub fn is_filled(&self) -> bool {
        match self {
            Self::Rectangle { filled, .. }
            | Self::Ellipse { filled, .. }
            | Self::Polygon { filled, .. } => *filled,
            _ => false,
        }
    }

    /// Vertices approximating the shape outline, in canvas coordinates.
    /// Ellipses are sampled with `segments` points.
    pub fn outline(&self, segments: usize) -> Vec<Point> {
        match self {
            Self::Line { from, to, .. } => vec![*from, *to],
            Self::Rectangle { rect, .. } => {
                let r = rect.normalized();
                vec![
                    Point::new(r.x, r.y),
                    Point::new(r.x + r.width, r.y),
                    Point::new(r.x + r.width, r.y + r.height),
                    Point::new(r.x, r.y + r.height),
                ]
            }
            Self::Ellipse { bounds, .. } => {
                let b = bounds.normalized();
                let c = b.center();
                let (rx, ry) = (b.width / 2.0, b.height / 2.0);
                (0..segments.max(3)).map(|i| {
                    let t = i as f64 / segments.max(3) as f64 * std::f64::consts::TAU;
                    Point::new(c.x + rx * t.cos(), c.y + ry * t.sin())
                }).collect()
            }
            Self::Polygon { points, .. } => points.clone(),
            Self::Clear => Vec::new(),
        }
    }
}

impl std::fmt::Display for DrawCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fill = |filled: bool| if filled { " filled" } else { "" };
        match self {
            Self::Line { from, to, color } => write!(
                f, "line ({}, {}) -> ({}, {}) {color}", from.x, from.y, to.x, to.y
            ),
            Self::Rectangle { rect, color, filled } => write!(
                f, "rectangle ({}, {}) {}x{} {color}{}", rect.x, rect.y, rect.width, rect.height, fill(*filled)
            ),
            Self::Ellipse { bounds, color, filled } => write!(
                f, "ellipse ({}, {}) {}x{} {color}{}", bounds.x, bounds.y, bounds.width, bounds.height, fill(*filled)
            ),
            Self::Polygon { points, color, filled } => {
                let pts: Vec<String> = points.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
                write!(f, "polygon [{}] {color}{}", pts.join(", "), fill(*filled))
            }
            Self::Clear => f.write_str("clear"),
        }
    }
}
