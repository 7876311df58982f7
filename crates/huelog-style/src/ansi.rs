//! Raw ANSI escape sequences and color-code tables.
//!
//! Everything here is a plain SGR sequence of the form `ESC [ <code> m`,
//! one code per sequence. Most callers want [`render`](crate::render)
//! instead; these are exposed for introspection and for hand-built output.

use crate::color::Color;

/// The escape character.
pub const ESC: char = '\u{1b}';

/// Resets every attribute.
pub const RESET: &str = "\u{1b}[0m";
/// Bold weight.
pub const BOLD: &str = "\u{1b}[1m";
/// Dim/faint weight.
pub const DIM: &str = "\u{1b}[2m";
/// Italic.
pub const ITALIC: &str = "\u{1b}[3m";
/// Underline.
pub const UNDERLINE: &str = "\u{1b}[4m";

/// Foreground color codes by name. `gray` and `grey` share an entry value.
pub const FOREGROUND: &[(&str, u8)] = &[
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
    ("gray", 90),
    ("grey", 90),
    ("bright_red", 91),
    ("bright_green", 92),
    ("bright_yellow", 93),
    ("bright_blue", 94),
    ("bright_magenta", 95),
    ("bright_cyan", 96),
    ("bright_white", 97),
];

/// Background color codes by name (foreground + 10).
pub const BACKGROUND: &[(&str, u8)] = &[
    ("black", 40),
    ("red", 41),
    ("green", 42),
    ("yellow", 43),
    ("blue", 44),
    ("magenta", 45),
    ("cyan", 46),
    ("white", 47),
    ("gray", 100),
    ("grey", 100),
    ("bright_red", 101),
    ("bright_green", 102),
    ("bright_yellow", 103),
    ("bright_blue", 104),
    ("bright_magenta", 105),
    ("bright_cyan", 106),
    ("bright_white", 107),
];

/// Looks up a foreground code by any accepted color spelling.
///
/// ```rust
/// assert_eq!(huelog_style::ansi::foreground("red"), Some(31));
/// assert_eq!(huelog_style::ansi::foreground("blueBright"), Some(94));
/// assert_eq!(huelog_style::ansi::foreground("purple"), None);
/// ```
pub fn foreground(name: &str) -> Option<u8> {
    name.parse::<Color>().ok().map(Color::fg_code)
}

/// Looks up a background code by any accepted color spelling.
pub fn background(name: &str) -> Option<u8> {
    name.parse::<Color>().ok().map(Color::bg_code)
}

/// Builds the SGR sequence for a single numeric code.
pub fn sgr(code: u8) -> String {
    format!("{ESC}[{code}m")
}
