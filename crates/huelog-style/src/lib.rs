//! # huelog-style - ANSI Styling for Terminal Output
//!
//! `huelog-style` maps a small, closed style vocabulary (sixteen named colors,
//! bold/dim/italic/underline) to ANSI escape sequences, and decides whether
//! color should be emitted at all.
//!
//! This crate is the styling foundation of the `huelog` logger, but can be
//! used on its own.
//!
//! ## Core Concepts
//!
//! - [`Color`]: One of the sixteen supported color names
//! - [`StyleSpec`]: Foreground, background and flags for a piece of text
//! - [`render`] / [`colorize`]: Apply a spec to text
//! - [`detect_color_support`]: The `NO_COLOR` / `FORCE_COLOR` / TTY heuristic
//! - [`ansi`]: Raw escape sequences and code tables
//!
//! ## Quick Start
//!
//! ```rust
//! use huelog_style::{render, Color, StyleSpec};
//!
//! let style = StyleSpec::new().fg(Color::Red).bold();
//!
//! // Explicitly enabled
//! assert_eq!(render("hello", Some(&style), Some(true)), "\u{1b}[1m\u{1b}[31mhello\u{1b}[0m");
//!
//! // Explicitly disabled
//! assert_eq!(render("hello", Some(&style), Some(false)), "hello");
//!
//! // Probed from the environment and stdout
//! println!("{}", render("maybe colored", Some(&style), None));
//! ```
//!
//! ## Styles From Configuration
//!
//! ```rust
//! use huelog_style::{Color, StyleSpec};
//!
//! let spec: StyleSpec = "magenta dim".parse().unwrap();
//! assert_eq!(spec, StyleSpec::new().fg(Color::Magenta).dim());
//!
//! assert!("purple".parse::<StyleSpec>().is_err());
//! ```

pub mod ansi;
mod color;
pub mod detect;
mod error;
mod render;
mod style;

pub use color::{Color, BACKGROUND_OFFSET};
pub use detect::{
    detect_color_support, detect_color_support_with, reset_color_detector, set_color_detector,
    ColorDetector, EnvReader, TerminalProbe,
};
pub use error::InvalidStyleError;
pub use render::{colorize, render, strip_styles};
pub use style::{parse_shorthand, StyleSpec};
