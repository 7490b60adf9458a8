/// Opaque RGB pen color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color { Color { r, g, b } }

/// Named colors understood by `color <name>`. Keys are lowercase.
const NAMED: &[(&str, Color)] = &[
    ("black",   rgb(0, 0, 0)),
    ("white",   rgb(255, 255, 255)),
    ("red",     rgb(255, 0, 0)),
    ("green",   rgb(0, 128, 0)),
    ("blue",    rgb(0, 0, 255)),
    ("yellow",  rgb(255, 255, 0)),
    ("cyan",    rgb(0, 255, 255)),
    ("magenta", rgb(255, 0, 255)),
    ("orange",  rgb(255, 165, 0)),
    ("purple",  rgb(128, 0, 128)),
    ("pink",    rgb(255, 192, 203)),
    ("brown",   rgb(165, 42, 42)),
    ("gray",    rgb(128, 128, 128)),
    ("grey",    rgb(128, 128, 128)),
    ("lime",    rgb(0, 255, 0)),
    ("navy",    rgb(0, 0, 128)),
    ("teal",    rgb(0, 128, 128)),
    ("maroon",  rgb(128, 0, 0)),
    ("olive",   rgb(128, 128, 0)),
    ("silver",  rgb(192, 192, 192)),
    ("gold",    rgb(255, 215, 0)),
];

impl Color {
    pub const BLACK: Color = rgb(0, 0, 0);
    pub const WHITE: Color = rgb(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self { rgb(r, g, b) }

    /// Case-insensitive lookup in the fixed color table.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED.iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, c)| *c)
    }

    /// Canonical table name of this color, if it has one.
    pub fn name(&self) -> Option<&'static str> {
        NAMED.iter().find(|(_, c)| c == self).map(|(n, _)| *n)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        NAMED.iter().map(|(n, _)| *n)
    }
}

impl Default for Color {
    fn default() -> Self { Self::BLACK }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(n) => f.write_str(n),
            None => write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b),
        }
    }
}
