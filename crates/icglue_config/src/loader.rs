//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::GlueConfig;
use std::path::Path;

/// The file name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "icglue.toml";

/// Loads and validates `icglue.toml` from a project directory.
pub fn load_config(project_dir: &Path) -> Result<GlueConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE_NAME);
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `icglue.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<GlueConfig, ConfigError> {
    let config: GlueConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &GlueConfig) -> Result<(), ConfigError> {
    for id in config.log.levels.keys() {
        if id.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "log.levels contains an empty log id".to_string(),
            ));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError(format!(
                "log id '{id}' contains whitespace"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use icglue_log::Level;

    #[test]
    fn empty_config_uses_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.log.default_level, Level::Debug);
        assert!(config.log.levels.is_empty());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[log]
default = "warning"
linenumbers = true
color = false
echo = false

[log.levels]
DONew = "error"
OStAt = "internal_error"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.log.default_level, Level::Warning);
        assert!(config.log.linenumbers);
        assert!(!config.log.color);
        assert!(!config.log.echo);
        assert_eq!(config.log.levels["DONew"], Level::Error);
        assert_eq!(config.log.levels["OStAt"], Level::InternalError);
    }

    #[test]
    fn unknown_level_is_parse_error() {
        let toml = r#"
[log]
default = "loud"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn empty_id_is_validation_error() {
        let toml = r#"
[log.levels]
"" = "debug"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn whitespace_id_is_validation_error() {
        let toml = r#"
[log.levels]
"DO New" = "debug"
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(format!("{err}").contains("DO New"));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[log]\ndefault = \"info\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.log.default_level, Level::Info);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
