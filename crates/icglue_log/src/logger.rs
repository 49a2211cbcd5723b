//! Threshold filtering and accumulation of log messages.

use crate::id::LogId;
use crate::level::Level;
use crate::record::LogRecord;
use crate::renderer::{LogRenderer, TerminalRenderer};
use std::collections::HashMap;
use std::fmt::Write;

/// Filters, keeps, and optionally echoes log messages.
///
/// A message passes when its level is at least the threshold for its id: the
/// per-id override if one is set, the default threshold otherwise. Passing
/// messages are kept as [`LogRecord`]s and, if an echo renderer is installed,
/// written to stderr.
///
/// A `Logger` is a plain value. It is handed to whatever owns the build
/// session instead of living in global state.
#[derive(Debug)]
pub struct Logger {
    default_level: Level,
    overrides: HashMap<String, Level>,
    records: Vec<LogRecord>,
    echo: Option<TerminalRenderer>,
}

impl Logger {
    /// Creates a logger that keeps everything from [`Level::Debug`] up and
    /// echoes nothing.
    pub fn new() -> Self {
        Self {
            default_level: Level::Debug,
            overrides: HashMap::new(),
            records: Vec::new(),
            echo: None,
        }
    }

    /// Creates a logger with the given default threshold.
    pub fn with_default_level(level: Level) -> Self {
        Self {
            default_level: level,
            ..Self::new()
        }
    }

    /// Installs a renderer used to echo every kept record to stderr.
    pub fn with_echo(mut self, renderer: TerminalRenderer) -> Self {
        self.echo = Some(renderer);
        self
    }

    /// Returns the default threshold.
    pub fn default_level(&self) -> Level {
        self.default_level
    }

    /// Sets the default threshold.
    pub fn set_default_level(&mut self, level: Level) {
        self.default_level = level;
    }

    /// Overrides the threshold for messages carrying `id`.
    pub fn set_particular_level(&mut self, id: &str, level: Level) {
        self.overrides.insert(id.to_string(), level);
    }

    /// Removes the override for `id`, falling back to the default threshold.
    pub fn clear_particular_level(&mut self, id: &str) {
        self.overrides.remove(id);
    }

    /// Returns the threshold that applies to `id`.
    pub fn threshold(&self, id: &str) -> Level {
        self.overrides
            .get(id)
            .copied()
            .unwrap_or(self.default_level)
    }

    /// Returns `true` if a message with `level` and `id` would be dropped.
    pub fn is_suppressed(&self, level: Level, id: LogId) -> bool {
        level < self.threshold(id.as_str())
    }

    /// Logs a message, attributing it to the caller's source location.
    #[track_caller]
    pub fn log(&mut self, level: Level, id: LogId, message: impl Into<String>) {
        if self.is_suppressed(level, id) {
            return;
        }
        let record = LogRecord::new(level, id, message);
        if let Some(renderer) = &self.echo {
            eprintln!("{}", renderer.render(&record));
        }
        self.records.push(record);
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&mut self, id: LogId, message: impl Into<String>) {
        self.log(Level::Debug, id, message);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn info(&mut self, id: LogId, message: impl Into<String>) {
        self.log(Level::Info, id, message);
    }

    /// Logs at [`Level::Warning`].
    #[track_caller]
    pub fn warning(&mut self, id: LogId, message: impl Into<String>) {
        self.log(Level::Warning, id, message);
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    pub fn error(&mut self, id: LogId, message: impl Into<String>) {
        self.log(Level::Error, id, message);
    }

    /// Logs at [`Level::InternalError`].
    #[track_caller]
    pub fn internal_error(&mut self, id: LogId, message: impl Into<String>) {
        self.log(Level::InternalError, id, message);
    }

    /// Returns all kept records in emission order.
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Takes all kept records, leaving the logger empty.
    pub fn take_all(&mut self) -> Vec<LogRecord> {
        std::mem::take(&mut self.records)
    }

    /// Returns the number of kept records at or above `level`.
    pub fn count_at_least(&self, level: Level) -> usize {
        self.records.iter().filter(|r| r.level >= level).count()
    }

    /// Returns `true` if any kept record is an error.
    pub fn has_errors(&self) -> bool {
        self.records.iter().any(|r| r.level.is_error())
    }

    /// Describes the default threshold and every override, one per line.
    ///
    /// Overrides are listed sorted by id.
    pub fn settings_summary(&self) -> String {
        let mut out = format!("Default loglevel is {}\n", self.default_level.label());
        let mut ids: Vec<_> = self.overrides.iter().collect();
        ids.sort_by(|a, b| a.0.cmp(b.0));
        for (id, level) in ids {
            let _ = writeln!(out, "LogID: {id} is set to level {}", level.label());
        }
        out
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
