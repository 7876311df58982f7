//! Color-support detection.
//!
//! The rule is a coarse on/off heuristic, evaluated on every call:
//!
//! 1. `NO_COLOR` set to any non-empty value disables color.
//! 2. Otherwise `FORCE_COLOR` set to anything but `"0"` enables color.
//! 3. Otherwise color is enabled iff standard output is a terminal.
//!
//! The environment and the terminal are read through [`EnvReader`] and
//! [`TerminalProbe`], so the rule can be exercised without touching process
//! state:
//!
//! ```rust
//! use huelog_style::detect::{detect_color_support_with, MockEnv, MockTerminal};
//!
//! let env = MockEnv::new().with_var("NO_COLOR", "1").with_var("FORCE_COLOR", "1");
//! assert!(!detect_color_support_with(&env, &MockTerminal::tty()));
//! ```
//!
//! [`render`](crate::render) falls back to [`detect_color_support`] when the
//! caller does not say whether color is enabled. That function goes through a
//! swappable process-wide detector; override it with [`set_color_detector`].

use std::collections::HashMap;

use once_cell::sync::Lazy;
use std::sync::Mutex;

/// Environment variable that suppresses color when non-empty.
pub const NO_COLOR: &str = "NO_COLOR";

/// Environment variable that forces color unless set to `"0"`.
pub const FORCE_COLOR: &str = "FORCE_COLOR";

/// Abstraction over environment variables.
pub trait EnvReader: Send + Sync {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Abstraction over the standard output stream's terminal state.
pub trait TerminalProbe: Send + Sync {
    /// Returns `true` if the stream is an interactive terminal.
    fn is_terminal(&self) -> bool;
}

// === Real implementations ===

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Probes the process's standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealStdout;

impl TerminalProbe for RealStdout {
    fn is_terminal(&self) -> bool {
        console::Term::stdout().is_term()
    }
}

// === Mock implementations for testing ===

/// Mock environment variable reader for testing.
#[derive(Debug, Clone, Default)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment variable.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

/// Mock terminal state for testing.
#[derive(Debug, Clone, Copy)]
pub struct MockTerminal {
    is_terminal: bool,
}

impl MockTerminal {
    /// Simulates an interactive terminal.
    pub fn tty() -> Self {
        Self { is_terminal: true }
    }

    /// Simulates a pipe or file.
    pub fn piped() -> Self {
        Self { is_terminal: false }
    }
}

impl TerminalProbe for MockTerminal {
    fn is_terminal(&self) -> bool {
        self.is_terminal
    }
}

/// Applies the detection rule to the given environment and terminal.
pub fn detect_color_support_with(env: &dyn EnvReader, terminal: &dyn TerminalProbe) -> bool {
    if env.var(NO_COLOR).is_some_and(|v| !v.is_empty()) {
        return false;
    }

    if env.var(FORCE_COLOR).is_some_and(|v| v != "0") {
        return true;
    }

    terminal.is_terminal()
}

/// A function answering "should color be emitted?".
pub type ColorDetector = fn() -> bool;

static COLOR_DETECTOR: Lazy<Mutex<ColorDetector>> = Lazy::new(|| Mutex::new(default_detector));

fn default_detector() -> bool {
    detect_color_support_with(&RealEnv, &RealStdout)
}

/// Overrides the detector used by [`detect_color_support`].
///
/// This affects every [`render`](crate::render) call that does not pass an
/// explicit `enabled` flag, and every logger built without one.
///
/// ```rust
/// use huelog_style::detect::{detect_color_support, reset_color_detector, set_color_detector};
///
/// set_color_detector(|| true);
/// assert!(detect_color_support());
/// reset_color_detector();
/// ```
pub fn set_color_detector(detector: ColorDetector) {
    let mut guard = COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the default environment/TTY detector.
pub fn reset_color_detector() {
    set_color_detector(default_detector);
}

/// Returns whether color output should be enabled right now.
///
/// Not cached: the environment and terminal are read on every call.
pub fn detect_color_support() -> bool {
    let detector = *COLOR_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}
