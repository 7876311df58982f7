//! # huelog - Themed, Leveled Console Logging
//!
//! `huelog` is a thin logger over a console-like writer. Every call gets a
//! colored label (`[name] LEVEL`) and is handed, with the caller's arguments
//! untouched, to the writer channel for its level.
//!
//! ## Core Concepts
//!
//! - [`Logger`]: Level methods (`info`, `success`, `warn`, `error`, `debug`)
//!   and the generic [`Logger::log`]
//! - [`LoggerConfig`]: Name, name style, theme overrides, color flag, writer
//! - [`Theme`] / [`ThemeOverrides`]: Per-level [`StyleSpec`]s, from code or YAML
//! - [`Writer`] / [`WriterOverrides`]: Channel functions with general fallback
//! - [`render`], [`colorize`], [`detect_color_support`], [`ansi`]: re-exported
//!   from `huelog-style`
//!
//! ## Quick Start
//!
//! ```rust
//! use huelog::{create_logger, LoggerConfig};
//!
//! #[derive(Debug)]
//! struct Listen {
//!     port: u16,
//! }
//!
//! let logger = create_logger(LoggerConfig::new().name("api"));
//! logger.info("Server started", &[&Listen { port: 3000 }]);
//! logger.warn("Disk space low", &[]);
//! ```
//!
//! ## Custom Themes
//!
//! ```rust
//! use huelog::{create_logger, Level, LoggerConfig, ThemeOverrides};
//!
//! let theme = ThemeOverrides::from_yaml("success: bright_blue underline").unwrap();
//! let logger = create_logger(LoggerConfig::new().theme(theme).enabled(true));
//!
//! assert!(logger.label(Level::Success).contains("\u{1b}[94m"));
//! ```
//!
//! ## Routing
//!
//! | Level     | Channel   |
//! |-----------|-----------|
//! | `info`    | general   |
//! | `success` | general   |
//! | `warn`    | warn      |
//! | `error`   | error     |
//! | `debug`   | debug     |
//!
//! A writer without a level's channel receives the call on its general channel.
//!
//! ## Features
//!
//! - **`log`** (default) - [`Logger`] implements `log::Log` and can be
//!   installed with `Logger::install`

mod error;
#[cfg(feature = "log")]
mod facade;
mod level;
mod logger;
mod theme;
mod writer;

pub use error::ThemeError;
pub use level::{Channel, Level};
pub use logger::{create_cw_logger, create_logger, Logger, LoggerConfig};
pub use theme::{Theme, ThemeOverrides, DEFAULT_NAME_STYLE};
pub use writer::{
    stream_sink, Record, RecordedCall, RecordingWriter, WriteFn, Writer, WriterOverrides,
};

// Style engine re-exports
pub use huelog_style::{
    ansi, colorize, detect, detect_color_support, render, strip_styles, Color, InvalidStyleError,
    StyleSpec,
};
