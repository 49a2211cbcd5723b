//! Leveled, per-id configurable logging for the icglue crates.
//!
//! Every message carries a [`Level`] and a short stable [`LogId`]. The
//! [`Logger`] drops messages below the threshold that applies to their id,
//! keeps the rest as [`LogRecord`]s, and can echo them through a
//! [`LogRenderer`] such as the [`TerminalRenderer`].

#![warn(missing_docs)]

pub mod id;
pub mod level;
pub mod logger;
pub mod record;
pub mod renderer;

pub use id::LogId;
pub use level::Level;
pub use logger::Logger;
pub use record::LogRecord;
pub use renderer::{LogRenderer, TerminalRenderer};
