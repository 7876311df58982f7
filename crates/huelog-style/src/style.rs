//! Style descriptions and their parsing from text and YAML.
//!
//! A [`StyleSpec`] is a plain value: an optional foreground, an optional
//! background and four independent flags. It is usually built in code:
//!
//! ```rust
//! use huelog_style::{Color, StyleSpec};
//!
//! let warn = StyleSpec::new().fg(Color::Yellow).bold();
//! assert!(warn.bold);
//! assert_eq!(warn.fg, Some(Color::Yellow));
//! ```
//!
//! or parsed from configuration, using the same forms a stylesheet accepts:
//!
//! ```rust
//! use huelog_style::{Color, StyleSpec};
//!
//! // Shorthand: flags, one color, optional `on_<color>` background
//! let spec: StyleSpec = "yellow bold on_blue".parse().unwrap();
//! assert_eq!(spec.bg, Some(Color::Blue));
//!
//! // Mapping
//! let value: serde_yaml::Value = serde_yaml::from_str("{ fg: red, underline: true }").unwrap();
//! let spec = StyleSpec::parse_value(&value, "error").unwrap();
//! assert_eq!(spec, StyleSpec::new().fg(Color::Red).underline());
//! ```

use std::borrow::Cow;
use std::str::FromStr;

use crate::color::Color;
use crate::error::InvalidStyleError;
use crate::render::render;

/// Visual attributes applied to a piece of text.
///
/// Unset fields emit nothing. A spec with nothing set renders text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleSpec {
    /// Creates an empty spec.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            italic: false,
            underline: false,
        }
    }

    /// Sets the foreground color.
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the background color.
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Returns true if nothing is set.
    pub fn is_plain(&self) -> bool {
        self.fg.is_none()
            && self.bg.is_none()
            && !self.bold
            && !self.dim
            && !self.italic
            && !self.underline
    }

    /// Renders `text` with this style. See [`render`].
    pub fn paint<'a>(&self, text: &'a str, enabled: Option<bool>) -> Cow<'a, str> {
        render(text, Some(self), enabled)
    }

    /// Parses a style from a YAML value.
    ///
    /// Strings are read as shorthand, mappings as attribute tables.
    /// `style_name` is only used in error messages.
    pub fn parse_value(
        value: &serde_yaml::Value,
        style_name: &str,
    ) -> Result<Self, InvalidStyleError> {
        match value {
            serde_yaml::Value::String(s) => parse_shorthand(s, style_name),
            serde_yaml::Value::Mapping(map) => Self::parse_mapping(map, style_name),
            other => Err(InvalidStyleError::value(
                style_name,
                format!("expected a string or a mapping, got {:?}", other),
            )),
        }
    }

    /// Parses a style from a YAML mapping of attributes.
    ///
    /// Keys: `fg`/`color`, `bg`/`background`, `bold`, `dim`, `italic`,
    /// `underline`.
    pub fn parse_mapping(
        map: &serde_yaml::Mapping,
        style_name: &str,
    ) -> Result<Self, InvalidStyleError> {
        let mut spec = StyleSpec::new();

        for (key, value) in map {
            let key_str = key.as_str().ok_or_else(|| {
                InvalidStyleError::value(
                    style_name,
                    format!("non-string key in style definition: {:?}", key),
                )
            })?;
            spec.set_attribute(key_str, value, style_name)?;
        }

        Ok(spec)
    }

    fn set_attribute(
        &mut self,
        name: &str,
        value: &serde_yaml::Value,
        style_name: &str,
    ) -> Result<(), InvalidStyleError> {
        match name {
            "fg" | "color" => self.fg = Some(parse_color(value, name, style_name)?),
            "bg" | "background" => self.bg = Some(parse_color(value, name, style_name)?),
            "bold" => self.bold = parse_bool(value, name, style_name)?,
            "dim" => self.dim = parse_bool(value, name, style_name)?,
            "italic" => self.italic = parse_bool(value, name, style_name)?,
            "underline" => self.underline = parse_bool(value, name, style_name)?,
            _ => {
                return Err(InvalidStyleError::UnknownAttribute {
                    style: style_name.to_string(),
                    attribute: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

impl FromStr for StyleSpec {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_shorthand(s, s)
    }
}

fn parse_color(
    value: &serde_yaml::Value,
    attr: &str,
    style_name: &str,
) -> Result<Color, InvalidStyleError> {
    let name = value.as_str().ok_or_else(|| {
        InvalidStyleError::value(
            style_name,
            format!("'{}' must be a color name, got {:?}", attr, value),
        )
    })?;
    name.parse()
}

fn parse_bool(
    value: &serde_yaml::Value,
    attr: &str,
    style_name: &str,
) -> Result<bool, InvalidStyleError> {
    value.as_bool().ok_or_else(|| {
        InvalidStyleError::value(
            style_name,
            format!("'{}' must be a boolean, got {:?}", attr, value),
        )
    })
}

/// Parses a shorthand string into a spec.
///
/// Space-separated words:
/// - `bold`, `dim`, `italic`, `underline` set flags
/// - `on_<color>` sets the background
/// - any other word is the foreground color (at most one)
///
/// Examples: `"cyan"`, `"yellow bold"`, `"white dim on_red"`.
pub fn parse_shorthand(s: &str, style_name: &str) -> Result<StyleSpec, InvalidStyleError> {
    let mut spec = StyleSpec::new();

    for part in s.split_whitespace() {
        match part.to_lowercase().as_str() {
            "bold" => spec.bold = true,
            "dim" => spec.dim = true,
            "italic" => spec.italic = true,
            "underline" => spec.underline = true,
            word => {
                if let Some(bg) = word.strip_prefix("on_") {
                    if spec.bg.is_some() {
                        return Err(InvalidStyleError::shorthand(
                            style_name,
                            s,
                            format!("multiple backgrounds, got '{}'", part),
                        ));
                    }
                    spec.bg = Some(bg.parse()?);
                    continue;
                }
                if spec.fg.is_some() {
                    return Err(InvalidStyleError::shorthand(
                        style_name,
                        s,
                        format!("multiple colors, got '{}'", part),
                    ));
                }
                spec.fg = Some(word.parse()?);
            }
        }
    }

    if spec.is_plain() {
        return Err(InvalidStyleError::shorthand(
            style_name,
            s,
            "empty shorthand",
        ));
    }

    Ok(spec)
}
