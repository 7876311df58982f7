//! Error types for theme loading.

use std::io;
use std::path::PathBuf;

use huelog_style::InvalidStyleError;

/// Errors raised while building a theme from YAML.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The YAML document itself is malformed.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The theme file could not be read.
    #[error("failed to read theme {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is well-formed but names an unknown level, color or
    /// attribute, or has the wrong shape.
    #[error(transparent)]
    Style(#[from] InvalidStyleError),
}
