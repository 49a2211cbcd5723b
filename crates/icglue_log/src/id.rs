//! Short stable identifiers attached to every log message.

use std::fmt;

/// A short, stable identifier naming the place a message comes from.
///
/// Ids are what per-id level overrides key on, so they never change once
/// published. By convention the first letter names the area (`D` for data
/// construction, `O` for object helpers).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct LogId(&'static str);

impl LogId {
    /// A generic object was created.
    pub const OBJECT_NEW: LogId = LogId("DONew");
    /// A module was created.
    pub const MODULE_NEW: LogId = LogId("DMNew");
    /// An instance was created.
    pub const INSTANCE_NEW: LogId = LogId("DINew");
    /// A child instance was placed into a resource module.
    pub const INSTANCE_IN_RESOURCE: LogId = LogId("DIRes");
    /// A codesection could not be created.
    pub const CODESECTION_NEW: LogId = LogId("DCsNw");
    /// A declaration could not be created.
    pub const DECLARATION_NEW: LogId = LogId("DDcNw");
    /// A regfile could not be created.
    pub const REGFILE_NEW: LogId = LogId("DRfNw");
    /// Applying a list of attributes failed.
    pub const SET_ATTRIBUTES: LogId = LogId("OStAt");

    /// Creates an id from a static string.
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// Returns the id text.
    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_raw_text() {
        assert_eq!(format!("{}", LogId::OBJECT_NEW), "DONew");
        assert_eq!(LogId::SET_ATTRIBUTES.as_str(), "OStAt");
    }

    #[test]
    fn custom_id() {
        const CUSTOM: LogId = LogId::new("XTest");
        assert_eq!(CUSTOM.as_str(), "XTest");
        assert_ne!(CUSTOM, LogId::MODULE_NEW);
    }
}
