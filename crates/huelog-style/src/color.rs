//! Named terminal colors.
//!
//! The vocabulary is closed: the eight standard ANSI colors, `gray` (bright
//! black) and the seven remaining bright variants.
//!
//! ```rust
//! use huelog_style::Color;
//!
//! assert_eq!(Color::Red.fg_code(), 31);
//! assert_eq!(Color::Red.bg_code(), 41);
//! assert_eq!("redBright".parse::<Color>().unwrap(), Color::BrightRed);
//! assert_eq!("grey".parse::<Color>().unwrap(), Color::Gray);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidStyleError;

/// Offset between a foreground code and its background counterpart.
pub const BACKGROUND_OFFSET: u8 = 10;

/// A named ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Bright black. Parsed from both `gray` and `grey`.
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Every color, in code order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Gray,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Foreground SGR code (30-37, 90-97).
    pub const fn fg_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::Gray => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
        }
    }

    /// Background SGR code (40-47, 100-107).
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + BACKGROUND_OFFSET
    }

    /// Canonical snake-case name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Gray => "gray",
            Color::BrightRed => "bright_red",
            Color::BrightGreen => "bright_green",
            Color::BrightYellow => "bright_yellow",
            Color::BrightBlue => "bright_blue",
            Color::BrightMagenta => "bright_magenta",
            Color::BrightCyan => "bright_cyan",
            Color::BrightWhite => "bright_white",
        }
    }

    fn parse_base(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" => Color::Gray,
            _ => return None,
        };
        Some(color)
    }

    fn brighten(self) -> Option<Color> {
        let bright = match self {
            // bright black is gray
            Color::Black | Color::Gray => Color::Gray,
            Color::Red => Color::BrightRed,
            Color::Green => Color::BrightGreen,
            Color::Yellow => Color::BrightYellow,
            Color::Blue => Color::BrightBlue,
            Color::Magenta => Color::BrightMagenta,
            Color::Cyan => Color::BrightCyan,
            Color::White => Color::BrightWhite,
            _ => return None,
        };
        Some(bright)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = InvalidStyleError;

    /// Parses a color name.
    ///
    /// Accepts `red`, `bright_red`, `bright-red`, `redBright`, `red_bright`
    /// in any case, plus `gray`/`grey`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || InvalidStyleError::UnknownColor(s.to_string());
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        if let Some(color) = Color::parse_base(&normalized) {
            return Ok(color);
        }

        let base = normalized
            .strip_prefix("bright")
            .or_else(|| normalized.strip_suffix("bright"))
            .ok_or_else(unknown)?;

        Color::parse_base(base)
            .and_then(Color::brighten)
            .ok_or_else(unknown)
    }
}
