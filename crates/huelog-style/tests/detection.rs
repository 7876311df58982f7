//! Tests for rendering with probed color support.
//!
//! These mutate process-wide state (environment variables and the global
//! detector), so they run serially.

use huelog_style::detect::{FORCE_COLOR, NO_COLOR};
use huelog_style::{
    detect_color_support, render, reset_color_detector, set_color_detector, Color, StyleSpec,
};
use serial_test::serial;

struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    fn new(names: &[&'static str]) -> Self {
        let saved = names
            .iter()
            .map(|name| (*name, std::env::var(name).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(name, v),
                None => std::env::remove_var(name),
            }
        }
        reset_color_detector();
    }
}

#[test]
#[serial]
fn render_probes_when_enabled_is_omitted() {
    let _guard = EnvGuard::new(&[NO_COLOR, FORCE_COLOR]);
    reset_color_detector();
    std::env::remove_var(NO_COLOR);
    std::env::set_var(FORCE_COLOR, "1");

    let styled = render("auto", Some(&StyleSpec::new().fg(Color::Cyan)), None);
    assert_eq!(styled, "\u{1b}[36mauto\u{1b}[0m");
}

#[test]
#[serial]
fn no_color_disables_probed_rendering() {
    let _guard = EnvGuard::new(&[NO_COLOR, FORCE_COLOR]);
    reset_color_detector();
    std::env::set_var(NO_COLOR, "1");
    std::env::set_var(FORCE_COLOR, "1");

    assert!(!detect_color_support());
    let styled = render("auto", Some(&StyleSpec::new().fg(Color::Cyan)), None);
    assert_eq!(styled, "auto");
}

#[test]
#[serial]
fn explicit_flag_ignores_detector() {
    let _guard = EnvGuard::new(&[]);
    set_color_detector(|| false);

    let styled = render("x", Some(&StyleSpec::new().bold()), Some(true));
    assert_eq!(styled, "\u{1b}[1mx\u{1b}[0m");
}

#[test]
#[serial]
fn custom_detector_is_consulted_each_call() {
    let _guard = EnvGuard::new(&[]);
    let style = StyleSpec::new().fg(Color::Green);

    set_color_detector(|| true);
    assert_eq!(render("ok", Some(&style), None), "\u{1b}[32mok\u{1b}[0m");

    set_color_detector(|| false);
    assert_eq!(render("ok", Some(&style), None), "ok");
}
