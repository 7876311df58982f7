//! Output destinations.
//!
//! A [`Writer`] is a capability record: a required general channel and
//! optional info/warn/error/debug channels. Each channel is a function that
//! receives one [`Record`] per log call. A level whose channel is missing is
//! written to the general channel instead.
//!
//! Loggers start from [`Writer::stdio`] and apply [`WriterOverrides`] channel
//! by channel:
//!
//! ```rust
//! use huelog::{Channel, Writer, WriterOverrides};
//!
//! // Send warnings somewhere else, keep the rest on stdout/stderr
//! let overrides = WriterOverrides::new()
//!     .set(Channel::Warn, |record: &huelog::Record<'_>| eprintln!("!! {}", record));
//! let writer = Writer::stdio().merge(&overrides);
//! assert!(writer.has_channel(Channel::Warn));
//! ```
//!
//! # Testing
//!
//! [`RecordingWriter`] captures every call for assertions.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex};

use console::Term;

use crate::level::{Channel, Level};

/// The arguments of one writer call.
///
/// `message` and `extra` are the caller's values, passed through by
/// reference and in order.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    /// Level of the log call.
    pub level: Level,
    /// Channel the level is routed to. When the writer lacks it, the record is
    /// still tagged with the requested channel but delivered to general.
    pub channel: Channel,
    /// Rendered label (`[name] LEVEL`), possibly containing escape codes.
    pub label: &'a str,
    pub message: &'a dyn fmt::Display,
    pub extra: &'a [&'a dyn fmt::Debug],
}

impl fmt::Display for Record<'_> {
    /// Console-style line: label, message and each extra separated by spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.label, self.message)?;
        for value in self.extra {
            write!(f, " {:?}", value)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("channel", &self.channel)
            .field("label", &self.label)
            .field("message", &self.message.to_string())
            .field("extra", &self.extra)
            .finish()
    }
}

/// A channel function.
pub type WriteFn = Arc<dyn Fn(&Record<'_>) + Send + Sync>;

/// A set of channel functions with a required general channel.
#[derive(Clone)]
pub struct Writer {
    general: WriteFn,
    info: Option<WriteFn>,
    warn: Option<WriteFn>,
    error: Option<WriteFn>,
    debug: Option<WriteFn>,
}

impl Writer {
    /// Creates a writer with only a general channel.
    pub fn new<F>(general: F) -> Self
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        Self {
            general: Arc::new(general),
            info: None,
            warn: None,
            error: None,
            debug: None,
        }
    }

    /// The host console: general, info and debug go to standard output,
    /// warn and error to standard error.
    ///
    /// Write failures, such as a closed pipe, are dropped.
    pub fn stdio() -> Self {
        let stdout: WriteFn = Arc::new(stream_sink(Term::stdout));
        let stderr: WriteFn = Arc::new(stream_sink(Term::stderr));
        Self {
            general: stdout.clone(),
            info: Some(stdout.clone()),
            warn: Some(stderr.clone()),
            error: Some(stderr),
            debug: Some(stdout),
        }
    }

    /// Sets a channel, returning `self` for chaining.
    pub fn with_channel<F>(self, channel: Channel, f: F) -> Self
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        self.with_write_fn(channel, Arc::new(f))
    }

    fn with_write_fn(mut self, channel: Channel, f: WriteFn) -> Self {
        match self.optional_slot(channel) {
            Some(slot) => *slot = Some(f),
            None => self.general = f,
        }
        self
    }

    /// Removes a channel so it falls back to general.
    ///
    /// The general channel cannot be removed; `without(Channel::General)`
    /// returns the writer unchanged.
    pub fn without(mut self, channel: Channel) -> Self {
        if let Some(slot) = self.optional_slot(channel) {
            *slot = None;
        }
        self
    }

    /// The slot of an optional channel; `None` for general.
    fn optional_slot(&mut self, channel: Channel) -> Option<&mut Option<WriteFn>> {
        match channel {
            Channel::General => None,
            Channel::Info => Some(&mut self.info),
            Channel::Warn => Some(&mut self.warn),
            Channel::Error => Some(&mut self.error),
            Channel::Debug => Some(&mut self.debug),
        }
    }

    fn channel_fn(&self, channel: Channel) -> Option<&WriteFn> {
        match channel {
            Channel::General => Some(&self.general),
            Channel::Info => self.info.as_ref(),
            Channel::Warn => self.warn.as_ref(),
            Channel::Error => self.error.as_ref(),
            Channel::Debug => self.debug.as_ref(),
        }
    }

    /// Returns true if the writer implements `channel` itself.
    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channel_fn(channel).is_some()
    }

    /// Returns the function for `channel`, or the general one if absent.
    pub fn resolve(&self, channel: Channel) -> &WriteFn {
        self.channel_fn(channel).unwrap_or(&self.general)
    }

    /// Applies `overrides` channel by channel.
    pub fn merge(self, overrides: &WriterOverrides) -> Self {
        let mut writer = self;
        for channel in Channel::ALL {
            writer = match overrides.entries.get(&channel) {
                Some(Entry::Set(f)) => writer.with_write_fn(channel, f.clone()),
                Some(Entry::Omit) => writer.without(channel),
                None => writer,
            };
        }
        writer
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::stdio()
    }
}

impl fmt::Debug for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channels: Vec<&str> = Channel::ALL
            .iter()
            .filter(|channel| self.has_channel(**channel))
            .map(|channel| channel.as_str())
            .collect();
        f.debug_struct("Writer").field("channels", &channels).finish()
    }
}

/// A channel function that writes each record as one line to the stream
/// returned by `open`.
///
/// The stream is opened per record. I/O errors are ignored so a broken
/// destination never takes the host process down.
///
/// ```rust
/// use std::io;
///
/// use huelog::{create_logger, stream_sink, LoggerConfig, WriterOverrides};
///
/// let logger = create_logger(
///     LoggerConfig::new()
///         .enabled(false)
///         .writer(WriterOverrides::only(stream_sink(io::sink))),
/// );
/// logger.info("discarded", &[]);
/// ```
pub fn stream_sink<F, W>(open: F) -> impl Fn(&Record<'_>) + Send + Sync + 'static
where
    F: Fn() -> W + Send + Sync + 'static,
    W: Write,
{
    move |record: &Record<'_>| {
        let line = format!("{}\n", record);
        let mut stream = open();
        let _ = stream.write_all(line.as_bytes());
        let _ = stream.flush();
    }
}

#[derive(Clone)]
enum Entry {
    Set(WriteFn),
    Omit,
}

/// Per-channel changes applied on top of a base [`Writer`].
///
/// Channels that are neither set nor omitted keep the base writer's function.
#[derive(Clone, Default)]
pub struct WriterOverrides {
    entries: HashMap<Channel, Entry>,
}

impl WriterOverrides {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// A writer with only a general channel: every level is written to `general`.
    pub fn only<F>(general: F) -> Self
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        let mut overrides = Self::new().set(Channel::General, general);
        for channel in Channel::ALL {
            if channel != Channel::General {
                overrides = overrides.omit(channel);
            }
        }
        overrides
    }

    /// Replaces a channel.
    pub fn set<F>(mut self, channel: Channel, f: F) -> Self
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        self.entries.insert(channel, Entry::Set(Arc::new(f)));
        self
    }

    /// Removes a channel so it falls back to general. Ignored for general.
    pub fn omit(mut self, channel: Channel) -> Self {
        if channel != Channel::General {
            self.entries.insert(channel, Entry::Omit);
        }
        self
    }

    /// Returns true if nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for WriterOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = Vec::new();
        let mut omitted = Vec::new();
        for channel in Channel::ALL {
            match self.entries.get(&channel) {
                Some(Entry::Set(_)) => set.push(channel.as_str()),
                Some(Entry::Omit) => omitted.push(channel.as_str()),
                None => {}
            }
        }
        f.debug_struct("WriterOverrides")
            .field("set", &set)
            .field("omitted", &omitted)
            .finish()
    }
}

/// One call captured by a [`RecordingWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Channel function that received the call.
    pub sink: Channel,
    pub level: Level,
    /// Channel the level was routed to.
    pub channel: Channel,
    pub label: String,
    /// `message` as displayed.
    pub message: String,
    /// Each extra as `{:?}`.
    pub extra: Vec<String>,
}

/// Captures records for tests.
///
/// ```rust
/// use huelog::{create_logger, Channel, LoggerConfig, RecordingWriter};
///
/// let recorder = RecordingWriter::new();
/// let logger = create_logger(LoggerConfig::new().enabled(false).writer(recorder.overrides()));
/// logger.warn(&"careful", &[]);
///
/// let calls = recorder.calls_on(Channel::Warn);
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].label, "WARN");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingWriter {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A channel function that records into this writer, tagged with `sink`.
    pub fn sink(&self, sink: Channel) -> impl Fn(&Record<'_>) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        move |record: &Record<'_>| {
            let call = RecordedCall {
                sink,
                level: record.level,
                channel: record.channel,
                label: record.label.to_string(),
                message: record.message.to_string(),
                extra: record.extra.iter().map(|v| format!("{:?}", v)).collect(),
            };
            calls
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .push(call);
        }
    }

    /// Overrides that route the general, warn, error and debug channels here.
    ///
    /// The info channel is left untouched; no level is routed to it.
    pub fn overrides(&self) -> WriterOverrides {
        WriterOverrides::new()
            .set(Channel::General, self.sink(Channel::General))
            .set(Channel::Warn, self.sink(Channel::Warn))
            .set(Channel::Error, self.sink(Channel::Error))
            .set(Channel::Debug, self.sink(Channel::Debug))
    }

    /// Every captured call, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Captured calls received by the `sink` channel function.
    pub fn calls_on(&self, sink: Channel) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| call.sink == sink)
            .collect()
    }
}
