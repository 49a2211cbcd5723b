//! Rendering of log records into terminal lines.

use crate::level::Level;
use crate::record::LogRecord;

const BOLD: &str = "\x1b[1m";
const BLUE: &str = "\x1b[34m";
const MAGENTA: &str = "\x1b[35m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Trait for turning a [`LogRecord`] into one line of output.
pub trait LogRenderer {
    /// Renders a single record, without a trailing newline.
    fn render(&self, record: &LogRecord) -> String;
}

/// Renders records as `<label>,<id>    <message>`.
///
/// Produces output like:
/// ```text
/// E,DRfNw    Cannot add regfile to resource module rom
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalRenderer {
    /// Whether to color the header with ANSI escape codes.
    pub color: bool,
    /// Whether to append the emitting `file:line`.
    pub linenumbers: bool,
}

impl TerminalRenderer {
    /// Creates a new terminal renderer.
    pub fn new(color: bool, linenumbers: bool) -> Self {
        Self { color, linenumbers }
    }

    fn header_color(level: Level) -> String {
        match level {
            Level::Debug => format!("{BOLD}{BLUE}"),
            Level::Info => BOLD.to_string(),
            Level::Warning => format!("{BOLD}{MAGENTA}"),
            Level::Error | Level::InternalError => format!("{BOLD}{RED}"),
        }
    }
}

impl LogRenderer for TerminalRenderer {
    fn render(&self, record: &LogRecord) -> String {
        let mut out = if self.color {
            format!(
                "{}{},{}{RESET}    {}",
                Self::header_color(record.level),
                record.level.label(),
                record.id,
                record.message
            )
        } else {
            format!("{},{}    {}", record.level.label(), record.id, record.message)
        };

        if self.linenumbers {
            out.push_str(&format!(
                " ({}:{})",
                record.location.file(),
                record.location.line()
            ));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::LogId;

    #[test]
    fn plain_format() {
        let record = LogRecord::new(Level::Error, LogId::REGFILE_NEW, "no regfile here");
        let out = TerminalRenderer::new(false, false).render(&record);
        assert_eq!(out, "E,DRfNw    no regfile here");
    }

    #[test]
    fn internal_error_label() {
        let record = LogRecord::new(Level::InternalError, LogId::OBJECT_NEW, "broken");
        let out = TerminalRenderer::default().render(&record);
        assert!(out.starts_with("INTERNAL ERROR,DONew"));
    }

    #[test]
    fn colored_header_is_reset_before_message() {
        let record = LogRecord::new(Level::Warning, LogId::MODULE_NEW, "careful");
        let out = TerminalRenderer::new(true, false).render(&record);
        assert!(out.starts_with("\x1b[1m\x1b[35mW,DMNew\x1b[0m"));
        assert!(out.ends_with("    careful"));
    }

    #[test]
    fn linenumbers_append_location() {
        let record = LogRecord::new(Level::Info, LogId::MODULE_NEW, "msg");
        let out = TerminalRenderer::new(false, true).render(&record);
        assert!(out.contains(&format!("({}:", file!())));
        assert!(out.ends_with(')'));
    }
}
