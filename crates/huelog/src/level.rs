//! Log levels and the writer channels they are routed to.

use std::fmt;
use std::str::FromStr;

use huelog_style::InvalidStyleError;

/// Severity/category of a log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Debug,
}

impl Level {
    /// Every level, in declaration order.
    pub const ALL: [Level; 5] = [
        Level::Info,
        Level::Success,
        Level::Warn,
        Level::Error,
        Level::Debug,
    ];

    /// Lower-case name (`"info"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Success => "success",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Debug => "debug",
        }
    }

    /// Upper-case tag shown in the label (`"INFO"`).
    pub const fn tag(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Success => "SUCCESS",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Debug => "DEBUG",
        }
    }

    /// The writer channel this level is written to.
    ///
    /// Info and success share the general channel.
    pub const fn channel(self) -> Channel {
        match self {
            Level::Info | Level::Success => Channel::General,
            Level::Warn => Channel::Warn,
            Level::Error => Channel::Error,
            Level::Debug => Channel::Debug,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = InvalidStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "success" => Ok(Level::Success),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "debug" => Ok(Level::Debug),
            _ => Err(InvalidStyleError::UnknownLevel(s.to_string())),
        }
    }
}

/// A named output destination of a [`Writer`](crate::Writer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// The catch-all channel every writer has.
    General,
    Info,
    Warn,
    Error,
    Debug,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::General,
        Channel::Info,
        Channel::Warn,
        Channel::Error,
        Channel::Debug,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::General => "general",
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Debug => "debug",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
