//! Parsing and validation of `icglue.toml` configuration files.
//!
//! The configuration currently covers logging: the default threshold, per-id
//! overrides, and how echoed messages are rendered.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
