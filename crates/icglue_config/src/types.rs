//! Configuration types deserialized from `icglue.toml`.

use icglue_log::{Level, Logger, TerminalRenderer};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The top-level configuration parsed from `icglue.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct GlueConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// The `[log]` table.
#[derive(Debug, Deserialize)]
pub struct LogConfig {
    /// Threshold for ids without an override.
    #[serde(default = "default_level", rename = "default")]
    pub default_level: Level,
    /// Append `file:line` to echoed messages.
    #[serde(default)]
    pub linenumbers: bool,
    /// Color echoed message headers.
    #[serde(default = "default_true")]
    pub color: bool,
    /// Echo kept messages to stderr.
    #[serde(default = "default_true")]
    pub echo: bool,
    /// Per-id thresholds, keyed by log id (e.g. `DONew`).
    #[serde(default)]
    pub levels: BTreeMap<String, Level>,
}

fn default_level() -> Level {
    Level::Debug
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            linenumbers: false,
            color: true,
            echo: true,
            levels: BTreeMap::new(),
        }
    }
}

impl LogConfig {
    /// Builds a [`Logger`] with this threshold setup.
    pub fn build_logger(&self) -> Logger {
        let mut logger = Logger::with_default_level(self.default_level);
        for (id, level) in &self.levels {
            logger.set_particular_level(id, *level);
        }
        if self.echo {
            logger = logger.with_echo(TerminalRenderer::new(self.color, self.linenumbers));
        }
        logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use icglue_log::LogId;

    #[test]
    fn defaults() {
        let config = LogConfig::default();
        assert_eq!(config.default_level, Level::Debug);
        assert!(config.color);
        assert!(config.echo);
        assert!(!config.linenumbers);
        assert!(config.levels.is_empty());
    }

    #[test]
    fn build_logger_applies_levels() {
        let mut config = LogConfig {
            default_level: Level::Warning,
            echo: false,
            ..LogConfig::default()
        };
        config.levels.insert("DONew".to_string(), Level::Debug);
        let logger = config.build_logger();
        assert_eq!(logger.default_level(), Level::Warning);
        assert!(!logger.is_suppressed(Level::Debug, LogId::OBJECT_NEW));
        assert!(logger.is_suppressed(Level::Debug, LogId::MODULE_NEW));
    }
}
