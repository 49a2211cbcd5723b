//! Log severity levels ordered from least to most severe.

use serde::Deserialize;
use std::fmt;

/// The severity of a log message.
///
/// Ordered from least severe (`Debug`) to most severe (`InternalError`),
/// matching the derived `PartialOrd`/`Ord` implementation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Construction traces and other developer detail.
    Debug,
    /// Progress information.
    Info,
    /// Something suspicious that does not stop the operation.
    Warning,
    /// A rejected operation.
    Error,
    /// A broken invariant inside icglue itself.
    InternalError,
}

impl Level {
    /// All levels in ascending order.
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warning,
        Level::Error,
        Level::InternalError,
    ];

    /// Returns the short label printed in front of rendered messages.
    pub fn label(self) -> &'static str {
        match self {
            Level::Debug => "D",
            Level::Info => "I",
            Level::Warning => "W",
            Level::Error => "E",
            Level::InternalError => "INTERNAL ERROR",
        }
    }

    /// Returns `true` for [`Error`](Level::Error) and
    /// [`InternalError`](Level::InternalError).
    pub fn is_error(self) -> bool {
        self >= Level::Error
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warning => write!(f, "warning"),
            Level::Error => write!(f, "error"),
            Level::InternalError => write!(f, "internal_error"),
        }
    }
}
