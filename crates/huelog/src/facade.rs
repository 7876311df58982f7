//! Bridge to the `log` crate.
//!
//! A [`Logger`] can serve as the global `log` backend, so `log::info!` and
//! friends come out with the same labels as direct calls:
//!
//! ```rust,no_run
//! use huelog::{Logger, LoggerConfig};
//!
//! Logger::new(LoggerConfig::new().name("app"))
//!     .install(log::LevelFilter::Debug)
//!     .expect("another logger is already installed");
//!
//! log::warn!("disk space low");
//! ```
//!
//! `Trace` records are written as [`Level::Debug`]. When a record's target
//! differs from the logger name it is passed along as an extra.

use std::fmt;

use crate::level::Level;
use crate::logger::Logger;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let target = record.target();
        let show_target = !target.is_empty() && self.name() != Some(target);
        let extra: [&dyn fmt::Debug; 1] = [&target];
        let extra: &[&dyn fmt::Debug] = if show_target { &extra } else { &[] };

        Logger::log(self, Level::from(record.level()), record.args(), extra);
    }

    fn flush(&self) {}
}

impl Logger {
    /// Installs this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Fails if a global logger has already been set.
    pub fn install(self, max_level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}
