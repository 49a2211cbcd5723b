//! A single log message that passed its level threshold.

use crate::id::LogId;
use crate::level::Level;
use std::panic::Location;

/// A log message kept by the [`Logger`](crate::Logger).
#[derive(Clone, Debug)]
pub struct LogRecord {
    /// The severity of the message.
    pub level: Level,
    /// The stable id of the message.
    pub id: LogId,
    /// The formatted message text.
    pub message: String,
    /// The source location that emitted the message.
    pub location: &'static Location<'static>,
}

impl LogRecord {
    /// Creates a record attributed to the caller's source location.
    #[track_caller]
    pub fn new(level: Level, id: LogId, message: impl Into<String>) -> Self {
        Self {
            level,
            id,
            message: message.into(),
            location: Location::caller(),
        }
    }
}
