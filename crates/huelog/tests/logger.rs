//! Integration tests for the leveled logger.
//!
//! Writers are replaced with a [`RecordingWriter`] so each test can inspect
//! exactly which channel received which label and arguments.

use huelog::{
    ansi, create_logger, detect, strip_styles, Channel, Color, Level, LoggerConfig,
    RecordingWriter, StyleSpec, Theme, ThemeOverrides, WriterOverrides,
};
use serial_test::serial;

#[derive(Debug, PartialEq)]
struct Listen {
    port: u16,
}

fn recorder_config(recorder: &RecordingWriter) -> LoggerConfig {
    LoggerConfig::new().writer(recorder.overrides())
}

// ============================================================================
// Labels and arguments
// ============================================================================

#[test]
fn writes_colored_label_with_name_prefix() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).name("api").enabled(true));

    logger.info("Server started", &[&Listen { port: 3000 }]);

    let calls = recorder.calls_on(Channel::General);
    assert_eq!(calls.len(), 1);
    assert_eq!(recorder.calls().len(), 1);

    let call = &calls[0];
    assert!(call.label.contains("[api]"));
    assert!(call.label.contains("INFO"));
    assert!(call.label.ends_with(ansi::RESET));
    assert_eq!(call.message, "Server started");
    assert_eq!(call.extra, vec![format!("{:?}", Listen { port: 3000 })]);
}

#[test]
fn extras_keep_their_order() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).enabled(false));

    logger.error("failed", &[&1, &"two", &Some(3.5)]);

    let call = &recorder.calls_on(Channel::Error)[0];
    assert_eq!(call.extra, vec!["1", "\"two\"", "Some(3.5)"]);
}

#[test]
fn uses_plain_label_when_disabled() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).name("api").enabled(false));

    logger.warn("Disk space low", &[]);

    let call = &recorder.calls_on(Channel::Warn)[0];
    assert!(!call.label.contains(ansi::ESC));
    assert!(call.label.contains("WARN"));
    assert_eq!(call.label, "[api] WARN");
}

#[test]
fn omits_name_prefix_when_not_provided() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).enabled(true));

    logger.info("No name", &[]);

    let call = &recorder.calls_on(Channel::General)[0];
    let plain = strip_styles(&call.label);
    assert!(plain.starts_with("INFO"));
    assert!(!plain.contains('['));
    assert_eq!(plain, "INFO");
}

// ============================================================================
// Themes
// ============================================================================

#[test]
fn allows_overriding_theme_per_level() {
    let recorder = RecordingWriter::new();
    let theme = ThemeOverrides::new().set(
        Level::Success,
        StyleSpec::new().fg(Color::BrightBlue).underline(),
    );
    let logger = create_logger(recorder_config(&recorder).enabled(true).theme(theme));

    logger.success("Completed", &[]);

    let call = &recorder.calls_on(Channel::General)[0];
    assert!(call.label.contains("\u{1b}[4m"));
    assert!(call.label.contains("\u{1b}[94m"));
}

#[test]
fn success_override_leaves_other_levels_at_default() {
    let recorder = RecordingWriter::new();
    let theme = ThemeOverrides::new().set(Level::Success, StyleSpec::new().italic());
    let logger = create_logger(recorder_config(&recorder).enabled(true).theme(theme));

    for level in [Level::Info, Level::Warn, Level::Error, Level::Debug] {
        assert_eq!(logger.theme().get(level), Theme::default().get(level));
    }

    logger.info("x", &[]);
    logger.warn("x", &[]);
    assert_eq!(recorder.calls()[0].label, "\u{1b}[36mINFO\u{1b}[0m");
    assert_eq!(recorder.calls()[1].label, "\u{1b}[1m\u{1b}[33mWARN\u{1b}[0m");
}

#[test]
fn theme_from_yaml_drives_labels() {
    let recorder = RecordingWriter::new();
    let theme = ThemeOverrides::from_yaml("debug: { fg: gray, underline: true }").unwrap();
    let logger = create_logger(recorder_config(&recorder).enabled(true).theme(theme));

    logger.debug("details", &[]);

    let call = &recorder.calls_on(Channel::Debug)[0];
    assert_eq!(call.label, "\u{1b}[4m\u{1b}[90mDEBUG\u{1b}[0m");
}

// ============================================================================
// Channel routing
// ============================================================================

#[test]
fn routes_warn_error_debug_to_their_channels() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).enabled(true));

    logger.warn("Watch out", &[]);
    logger.error("Oops", &[]);
    logger.debug("Details", &[]);

    assert_eq!(recorder.calls_on(Channel::Warn).len(), 1);
    assert_eq!(recorder.calls_on(Channel::Error).len(), 1);
    assert_eq!(recorder.calls_on(Channel::Debug).len(), 1);
    assert!(recorder.calls_on(Channel::General).is_empty());
}

#[test]
fn falls_back_to_general_when_channel_missing() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(
        LoggerConfig::new()
            .enabled(true)
            .writer(WriterOverrides::only(recorder.sink(Channel::General))),
    );

    logger.warn("Fallback", &[]);

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].sink, Channel::General);
    assert_eq!(calls[0].channel, Channel::Warn);
    assert_eq!(strip_styles(&calls[0].label), "WARN");
}

#[test]
fn omitting_one_channel_keeps_the_others() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(
        LoggerConfig::new()
            .enabled(false)
            .writer(recorder.overrides().omit(Channel::Warn)),
    );

    logger.warn("to general", &[]);
    logger.error("to error", &[]);

    assert_eq!(recorder.calls_on(Channel::General).len(), 1);
    assert_eq!(recorder.calls_on(Channel::Error).len(), 1);
}

#[test]
fn generic_log_matches_level_methods() {
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder).name("x").enabled(true));

    logger.log(Level::Success, "via log", &[]);
    logger.success("via method", &[]);

    let calls = recorder.calls();
    assert_eq!(calls[0].label, calls[1].label);
    assert_eq!(calls[0].sink, calls[1].sink);
    assert_eq!(calls[0].level, Level::Success);
}

// ============================================================================
// Color detection
// ============================================================================

#[test]
#[serial]
fn enables_colors_automatically_when_not_specified() {
    detect::set_color_detector(|| true);
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder));
    detect::reset_color_detector();

    logger.info("Auto colors", &[]);

    assert!(logger.is_enabled());
    assert!(recorder.calls()[0].label.contains(ansi::ESC));
}

#[test]
#[serial]
fn detection_happens_once_at_construction() {
    detect::set_color_detector(|| false);
    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder));

    detect::set_color_detector(|| true);
    logger.info("still plain", &[]);
    detect::reset_color_detector();

    assert_eq!(recorder.calls()[0].label, "INFO");
}

#[test]
#[serial]
fn force_color_env_enables_labels() {
    let saved_force = std::env::var(detect::FORCE_COLOR).ok();
    let saved_no = std::env::var(detect::NO_COLOR).ok();
    detect::reset_color_detector();
    std::env::remove_var(detect::NO_COLOR);
    std::env::set_var(detect::FORCE_COLOR, "1");

    let recorder = RecordingWriter::new();
    let logger = create_logger(recorder_config(&recorder));
    logger.info("Auto colors", &[]);

    match saved_force {
        Some(v) => std::env::set_var(detect::FORCE_COLOR, v),
        None => std::env::remove_var(detect::FORCE_COLOR),
    }
    if let Some(v) = saved_no {
        std::env::set_var(detect::NO_COLOR, v);
    }

    assert!(recorder.calls()[0].label.contains(ansi::ESC));
}
