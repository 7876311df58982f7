//! The style engine: text plus a [`StyleSpec`] in, decorated text out.

use std::borrow::Cow;

use crate::ansi::{self, BOLD, DIM, ITALIC, RESET, UNDERLINE};
use crate::detect::detect_color_support;
use crate::style::StyleSpec;

/// Wraps `text` in the escape sequences described by `style`.
///
/// - No style: `text` is returned as is.
/// - `enabled` of `None` asks [`detect_color_support`]; a resolved `false`
///   returns `text` as is.
/// - Otherwise the prefixes are emitted in a fixed order (bold, dim, italic,
///   underline, foreground, background), followed by `text` and [`RESET`].
///   A style with nothing set emits no prefix and no reset.
///
/// ```rust
/// use huelog_style::{render, Color, StyleSpec};
///
/// let styled = render("hello", Some(&StyleSpec::new().fg(Color::Red).bold()), Some(true));
/// assert_eq!(styled, "\u{1b}[1m\u{1b}[31mhello\u{1b}[0m");
///
/// assert_eq!(render("hello", None, Some(true)), "hello");
/// ```
pub fn render<'a>(text: &'a str, style: Option<&StyleSpec>, enabled: Option<bool>) -> Cow<'a, str> {
    let Some(style) = style else {
        return Cow::Borrowed(text);
    };

    if !enabled.unwrap_or_else(detect_color_support) {
        return Cow::Borrowed(text);
    }

    let prefix = prefix_for(style);
    if prefix.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(prefix.len() + text.len() + RESET.len());
    out.push_str(&prefix);
    out.push_str(text);
    out.push_str(RESET);
    Cow::Owned(out)
}

/// Alias of [`render`].
pub fn colorize<'a>(
    text: &'a str,
    style: Option<&StyleSpec>,
    enabled: Option<bool>,
) -> Cow<'a, str> {
    render(text, style, enabled)
}

/// Removes every escape sequence from `text`, leaving what the terminal shows.
pub fn strip_styles(text: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(text)
}

fn prefix_for(style: &StyleSpec) -> String {
    let mut prefix = String::new();

    if style.bold {
        prefix.push_str(BOLD);
    }
    if style.dim {
        prefix.push_str(DIM);
    }
    if style.italic {
        prefix.push_str(ITALIC);
    }
    if style.underline {
        prefix.push_str(UNDERLINE);
    }
    if let Some(fg) = style.fg {
        prefix.push_str(&ansi::sgr(fg.fg_code()));
    }
    if let Some(bg) = style.bg {
        prefix.push_str(&ansi::sgr(bg.bg_code()));
    }

    prefix
}
