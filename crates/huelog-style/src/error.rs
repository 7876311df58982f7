//! Error types for style parsing.

/// Errors raised when a style, color or level is described with text that
/// falls outside the fixed vocabulary.
///
/// The typed API ([`Color`](crate::Color), [`StyleSpec`](crate::StyleSpec))
/// cannot produce these; they only come from the string and YAML parsers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStyleError {
    /// Color name is not one of the sixteen supported names.
    #[error("unknown color name: '{0}'")]
    UnknownColor(String),

    /// Level name is not one of info, success, warn, error, debug.
    #[error("unknown log level: '{0}'")]
    UnknownLevel(String),

    /// Attribute key in a style mapping is not recognized.
    #[error("unknown attribute '{attribute}' in style '{style}'")]
    UnknownAttribute { style: String, attribute: String },

    /// Shorthand string could not be parsed.
    #[error("invalid shorthand '{value}' for style '{style}': {reason}")]
    InvalidShorthand {
        style: String,
        value: String,
        reason: String,
    },

    /// Value has the wrong shape (e.g. a number where a boolean is expected).
    #[error("invalid value for style '{style}': {message}")]
    InvalidValue { style: String, message: String },
}

impl InvalidStyleError {
    pub(crate) fn shorthand(
        style: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidShorthand {
            style: style.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn value(style: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            style: style.into(),
            message: message.into(),
        }
    }
}
