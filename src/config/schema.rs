//! Configuration schema definitions.
//!
//! The logger is configured from two environment values. They are captured
//! into a plain struct so the core never touches process state directly.

use serde::{Deserialize, Serialize};

/// Environment variable holding the comma-separated tag allow-list.
pub const ALLOW_LIST_VAR: &str = "DEBUG";

/// Environment variable that disables color when set to any non-empty value.
pub const NO_COLOR_VAR: &str = "NOCOLOR";

/// Root configuration for logger construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DebugConfig {
    /// Raw allow-list, e.g. `"db:*,cache"`. Empty means nothing is enabled.
    pub allow_list: String,

    /// Suppress color in the tag prefix.
    pub color_suppressed: bool,
}

impl DebugConfig {
    pub fn new(allow_list: impl Into<String>) -> Self {
        Self {
            allow_list: allow_list.into(),
            color_suppressed: false,
        }
    }

    /// Same config with color suppressed.
    pub fn without_color(mut self) -> Self {
        self.color_suppressed = true;
        self
    }

    /// True when an allow-list is present at all.
    pub fn is_active(&self) -> bool {
        !self.allow_list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inactive() {
        let config = DebugConfig::default();
        assert!(!config.is_active());
        assert!(!config.color_suppressed);
    }

    #[test]
    fn test_builder_helpers() {
        let config = DebugConfig::new("svc").without_color();
        assert!(config.is_active());
        assert!(config.color_suppressed);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: DebugConfig = serde_json::from_str(r#"{"allow_list":"a,b"}"#).unwrap();
        assert_eq!(config.allow_list, "a,b");
        assert!(!config.color_suppressed);
    }
}
