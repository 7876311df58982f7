//! The leveled logger.
//!
//! A [`Logger`] is built once from a [`LoggerConfig`] and never changes. Each
//! call renders a label (`[name] LEVEL`) and hands it, together with the
//! caller's message and extras, to exactly one writer channel.
//!
//! ```rust
//! use huelog::{create_logger, Channel, LoggerConfig, RecordingWriter};
//!
//! #[derive(Debug)]
//! struct Listen {
//!     port: u16,
//! }
//!
//! let recorder = RecordingWriter::new();
//! let logger = create_logger(
//!     LoggerConfig::new()
//!         .name("api")
//!         .enabled(false)
//!         .writer(recorder.overrides()),
//! );
//!
//! logger.info("Server started", &[&Listen { port: 3000 }]);
//!
//! let call = &recorder.calls_on(Channel::General)[0];
//! assert_eq!(call.label, "[api] INFO");
//! assert_eq!(call.message, "Server started");
//! assert_eq!(call.extra, vec!["Listen { port: 3000 }".to_string()]);
//! ```

use std::fmt;

use huelog_style::{detect_color_support, render, StyleSpec};

use crate::level::Level;
use crate::theme::{Theme, ThemeOverrides, DEFAULT_NAME_STYLE};
use crate::writer::{Record, Writer, WriterOverrides};

/// Options for building a [`Logger`]. Everything is optional.
#[derive(Debug, Clone, Default)]
pub struct LoggerConfig {
    name: Option<String>,
    name_style: Option<StyleSpec>,
    theme: ThemeOverrides,
    enabled: Option<bool>,
    writer: WriterOverrides,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label prefix, rendered as `[name]`.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Style of the `[name]` segment. Defaults to dim white.
    pub fn name_style(mut self, style: StyleSpec) -> Self {
        self.name_style = Some(style);
        self
    }

    /// Per-level styles layered over the default theme.
    pub fn theme(mut self, overrides: ThemeOverrides) -> Self {
        self.theme = overrides;
        self
    }

    /// Forces color on or off. When unset, color support is detected once,
    /// at construction.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Channel functions layered over [`Writer::stdio`].
    pub fn writer(mut self, overrides: WriterOverrides) -> Self {
        self.writer = overrides;
        self
    }
}

/// A themed, leveled logger.
#[derive(Debug, Clone)]
pub struct Logger {
    theme: Theme,
    name: Option<String>,
    name_style: StyleSpec,
    enabled: bool,
    writer: Writer,
}

impl Logger {
    /// Resolves `config` against the defaults.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            theme: Theme::default().merge(&config.theme),
            name: config.name,
            name_style: config.name_style.unwrap_or(DEFAULT_NAME_STYLE),
            enabled: config.enabled.unwrap_or_else(detect_color_support),
            writer: Writer::stdio().merge(&config.writer),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether labels carry escape codes.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn name_style(&self) -> &StyleSpec {
        &self.name_style
    }

    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    pub fn info(&self, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        self.log(Level::Info, message, extra);
    }

    pub fn success(&self, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        self.log(Level::Success, message, extra);
    }

    pub fn warn(&self, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        self.log(Level::Warn, message, extra);
    }

    pub fn error(&self, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        self.log(Level::Error, message, extra);
    }

    pub fn debug(&self, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        self.log(Level::Debug, message, extra);
    }

    /// Writes one record for `level`.
    ///
    /// The level's channel is used if the writer has it, the general channel
    /// otherwise. `message` and `extra` reach the writer untouched.
    pub fn log(&self, level: Level, message: impl fmt::Display, extra: &[&dyn fmt::Debug]) {
        let channel = level.channel();
        let label = self.label(level);
        let write = self.writer.resolve(channel);
        write(&Record {
            level,
            channel,
            label: &label,
            message: &message,
            extra,
        });
    }

    /// Renders the label for `level`: `[name] TAG`, or just `TAG` when the
    /// logger has no (or an empty) name.
    pub fn label(&self, level: Level) -> String {
        let enabled = Some(self.enabled);
        let tag = render(level.tag(), Some(self.theme.get(level)), enabled);

        match self.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => {
                let bracketed = format!("[{}]", name);
                let name_segment = render(&bracketed, Some(&self.name_style), enabled);
                format!("{} {}", name_segment, tag)
            }
            None => tag.into_owned(),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

/// Builds a [`Logger`] from `config`.
pub fn create_logger(config: LoggerConfig) -> Logger {
    Logger::new(config)
}

/// Builds a [`Logger`] on the [`Theme::cw`] preset.
///
/// Theme entries in `config` take precedence over the preset, level by level.
pub fn create_cw_logger(config: LoggerConfig) -> Logger {
    let theme = ThemeOverrides::from(Theme::cw()).and(&config.theme);
    Logger::new(config.theme(theme))
}
