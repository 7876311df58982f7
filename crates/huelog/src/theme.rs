//! Per-level styles.
//!
//! A [`Theme`] always has a style for every [`Level`]. Callers customize it
//! with [`ThemeOverrides`], a partial theme whose entries replace whole levels
//! and leave the others alone:
//!
//! ```rust
//! use huelog::{Color, Level, StyleSpec, Theme, ThemeOverrides};
//!
//! let overrides = ThemeOverrides::new()
//!     .set(Level::Success, StyleSpec::new().fg(Color::BrightBlue).underline());
//! let theme = Theme::default().merge(&overrides);
//!
//! assert_eq!(theme.get(Level::Success).fg, Some(Color::BrightBlue));
//! assert_eq!(theme.get(Level::Info), Theme::default().get(Level::Info));
//! ```
//!
//! Overrides can also come from YAML, with the same value forms as
//! [`StyleSpec::parse_value`]:
//!
//! ```rust
//! use huelog::{Color, Level, ThemeOverrides};
//!
//! let overrides = ThemeOverrides::from_yaml(r#"
//! warn: "yellow underline"
//! error: { fg: red, bg: white, bold: true }
//! "#).unwrap();
//!
//! assert_eq!(overrides.get(Level::Error).unwrap().bg, Some(Color::White));
//! assert!(overrides.get(Level::Info).is_none());
//! ```

use std::path::Path;

use huelog_style::{Color, InvalidStyleError, StyleSpec};

use crate::error::ThemeError;
use crate::level::Level;

/// Style applied to the `[name]` segment when none is configured.
pub const DEFAULT_NAME_STYLE: StyleSpec = StyleSpec::new().fg(Color::White).dim();

/// A complete level-to-style mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    info: StyleSpec,
    success: StyleSpec,
    warn: StyleSpec,
    error: StyleSpec,
    debug: StyleSpec,
}

impl Default for Theme {
    /// The built-in theme: cyan info, green success, bold yellow warn,
    /// bold red error, dim magenta debug.
    fn default() -> Self {
        Self {
            info: StyleSpec::new().fg(Color::Cyan),
            success: StyleSpec::new().fg(Color::Green),
            warn: StyleSpec::new().fg(Color::Yellow).bold(),
            error: StyleSpec::new().fg(Color::Red).bold(),
            debug: StyleSpec::new().fg(Color::Magenta).dim(),
        }
    }
}

impl Theme {
    /// The "cw" preset.
    ///
    /// Cyan info, green success, bold yellow warn, bold red error, dim
    /// magenta debug. Spelled out rather than derived from [`Theme::default`]
    /// so loggers built with [`create_cw_logger`](crate::create_cw_logger)
    /// keep this palette if the default changes.
    pub fn cw() -> Self {
        Self {
            info: StyleSpec::new().fg(Color::Cyan),
            success: StyleSpec::new().fg(Color::Green),
            warn: StyleSpec::new().fg(Color::Yellow).bold(),
            error: StyleSpec::new().fg(Color::Red).bold(),
            debug: StyleSpec::new().fg(Color::Magenta).dim(),
        }
    }

    /// Returns the style for `level`.
    pub fn get(&self, level: Level) -> &StyleSpec {
        match level {
            Level::Info => &self.info,
            Level::Success => &self.success,
            Level::Warn => &self.warn,
            Level::Error => &self.error,
            Level::Debug => &self.debug,
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut StyleSpec {
        match level {
            Level::Info => &mut self.info,
            Level::Success => &mut self.success,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
            Level::Debug => &mut self.debug,
        }
    }

    /// Replaces the style for one level, returning `self` for chaining.
    pub fn with(mut self, level: Level, style: StyleSpec) -> Self {
        *self.slot_mut(level) = style;
        self
    }

    /// Applies `overrides` level by level.
    pub fn merge(mut self, overrides: &ThemeOverrides) -> Self {
        for level in Level::ALL {
            if let Some(style) = overrides.get(level) {
                *self.slot_mut(level) = *style;
            }
        }
        self
    }
}

/// A partial theme: an optional style per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeOverrides {
    info: Option<StyleSpec>,
    success: Option<StyleSpec>,
    warn: Option<StyleSpec>,
    error: Option<StyleSpec>,
    debug: Option<StyleSpec>,
}

impl ThemeOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style for `level`, returning `self` for chaining.
    pub fn set(mut self, level: Level, style: StyleSpec) -> Self {
        *self.slot_mut(level) = Some(style);
        self
    }

    /// Returns the override for `level`, if any.
    pub fn get(&self, level: Level) -> Option<&StyleSpec> {
        match level {
            Level::Info => self.info.as_ref(),
            Level::Success => self.success.as_ref(),
            Level::Warn => self.warn.as_ref(),
            Level::Error => self.error.as_ref(),
            Level::Debug => self.debug.as_ref(),
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<StyleSpec> {
        match level {
            Level::Info => &mut self.info,
            Level::Success => &mut self.success,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
            Level::Debug => &mut self.debug,
        }
    }

    /// Returns true if no level is overridden.
    pub fn is_empty(&self) -> bool {
        Level::ALL.iter().all(|level| self.get(*level).is_none())
    }

    /// Layers `other` on top of `self`; entries in `other` win.
    pub fn and(mut self, other: &ThemeOverrides) -> Self {
        for level in Level::ALL {
            if let Some(style) = other.get(level) {
                *self.slot_mut(level) = Some(*style);
            }
        }
        self
    }

    /// Parses overrides from a YAML mapping of level names to styles.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed YAML and
    /// [`ThemeError::Style`] for unknown levels, colors or attributes.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let root: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let map = match root {
            serde_yaml::Value::Mapping(map) => map,
            // An empty document overrides nothing
            serde_yaml::Value::Null => return Ok(Self::new()),
            other => {
                return Err(InvalidStyleError::InvalidValue {
                    style: "<theme>".to_string(),
                    message: format!("expected a mapping of levels, got {:?}", other),
                }
                .into())
            }
        };

        let mut overrides = Self::new();
        for (key, value) in &map {
            let name = key.as_str().ok_or_else(|| InvalidStyleError::InvalidValue {
                style: "<theme>".to_string(),
                message: format!("non-string level key: {:?}", key),
            })?;
            let level: Level = name.parse()?;
            let style = StyleSpec::parse_value(value, level.as_str())?;
            overrides = overrides.set(level, style);
        }
        Ok(overrides)
    }

    /// Loads overrides from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Load`] if the file cannot be read, otherwise the
    /// same errors as [`from_yaml`](Self::from_yaml).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }
}

impl From<Theme> for ThemeOverrides {
    fn from(theme: Theme) -> Self {
        let mut overrides = Self::new();
        for level in Level::ALL {
            overrides = overrides.set(level, *theme.get(level));
        }
        overrides
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = Theme::default();
        assert_eq!(*theme.get(Level::Info), StyleSpec::new().fg(Color::Cyan));
        assert_eq!(*theme.get(Level::Success), StyleSpec::new().fg(Color::Green));
        assert_eq!(
            *theme.get(Level::Warn),
            StyleSpec::new().fg(Color::Yellow).bold()
        );
        assert_eq!(*theme.get(Level::Error), StyleSpec::new().fg(Color::Red).bold());
        assert_eq!(
            *theme.get(Level::Debug),
            StyleSpec::new().fg(Color::Magenta).dim()
        );
    }

    #[test]
    fn test_cw_palette() {
        let cw = Theme::cw();
        assert_eq!(*cw.get(Level::Info), StyleSpec::new().fg(Color::Cyan));
        assert_eq!(*cw.get(Level::Success), StyleSpec::new().fg(Color::Green));
        assert_eq!(*cw.get(Level::Warn), StyleSpec::new().fg(Color::Yellow).bold());
        assert_eq!(*cw.get(Level::Error), StyleSpec::new().fg(Color::Red).bold());
        assert_eq!(*cw.get(Level::Debug), StyleSpec::new().fg(Color::Magenta).dim());
    }

    #[test]
    fn test_merge_replaces_only_given_levels() {
        let custom = StyleSpec::new().fg(Color::BrightBlue).underline();
        let theme = Theme::default().merge(&ThemeOverrides::new().set(Level::Success, custom));

        assert_eq!(*theme.get(Level::Success), custom);
        for level in [Level::Info, Level::Warn, Level::Error, Level::Debug] {
            assert_eq!(theme.get(level), Theme::default().get(level));
        }
    }

    #[test]
    fn test_merge_is_shallow() {
        // Replacing warn with a color-only style drops the default bold
        let theme = Theme::default().merge(
            &ThemeOverrides::new().set(Level::Warn, StyleSpec::new().fg(Color::BrightYellow)),
        );
        assert!(!theme.get(Level::Warn).bold);
    }

    #[test]
    fn test_empty_overrides() {
        assert!(ThemeOverrides::new().is_empty());
        assert_eq!(Theme::default().merge(&ThemeOverrides::new()), Theme::default());
    }

    #[test]
    fn test_overrides_and() {
        let base = ThemeOverrides::from(Theme::cw());
        let caller = ThemeOverrides::new().set(Level::Debug, StyleSpec::new().italic());
        let layered = base.and(&caller);
        assert_eq!(layered.get(Level::Debug), Some(&StyleSpec::new().italic()));
        assert_eq!(layered.get(Level::Info), Some(Theme::cw().get(Level::Info)));
    }

    #[test]
    fn test_from_yaml() {
        let overrides = ThemeOverrides::from_yaml(
            r#"
info: cyan bold
warning: { fg: yellow, underline: true }
"#,
        )
        .unwrap();
        assert_eq!(
            overrides.get(Level::Info),
            Some(&StyleSpec::new().fg(Color::Cyan).bold())
        );
        assert_eq!(
            overrides.get(Level::Warn),
            Some(&StyleSpec::new().fg(Color::Yellow).underline())
        );
        assert!(overrides.get(Level::Error).is_none());
    }

    #[test]
    fn test_from_yaml_empty_document() {
        assert!(ThemeOverrides::from_yaml("").unwrap().is_empty());
    }

    #[test]
    fn test_from_yaml_unknown_level() {
        let err = ThemeOverrides::from_yaml("trace: red").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Style(InvalidStyleError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_from_yaml_unknown_color() {
        let err = ThemeOverrides::from_yaml("info: { fg: purple }").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Style(InvalidStyleError::UnknownColor(_))
        ));
    }

    #[test]
    fn test_from_yaml_not_a_mapping() {
        let err = ThemeOverrides::from_yaml("- info\n- warn\n").unwrap_err();
        assert!(matches!(
            err,
            ThemeError::Style(InvalidStyleError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_from_yaml_malformed() {
        let err = ThemeOverrides::from_yaml("info: [unclosed").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ThemeOverrides::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ThemeError::Load { .. }));
    }
}
