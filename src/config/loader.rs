//! Configuration loading from the process environment.

use std::env::{self, VarError};
use thiserror::Error;

use crate::config::schema::{DebugConfig, ALLOW_LIST_VAR, NO_COLOR_VAR};

/// Error type for configuration loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

impl DebugConfig {
    /// Read `DEBUG` and `NOCOLOR` from the environment.
    ///
    /// Unset and non-unicode values both count as empty, so this never fails.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`DebugConfig::from_env`] but reports values that are not valid unicode.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        let read = |key: &'static str| match env::var(key) {
            Ok(v) => Ok(Some(v)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        };

        let allow_list = read(ALLOW_LIST_VAR)?;
        let no_color = read(NO_COLOR_VAR)?;
        Ok(Self::from_values(allow_list, no_color))
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_values(lookup(ALLOW_LIST_VAR), lookup(NO_COLOR_VAR))
    }

    fn from_values(allow_list: Option<String>, no_color: Option<String>) -> Self {
        Self {
            allow_list: allow_list.unwrap_or_default(),
            color_suppressed: no_color.is_some_and(|v| !v.is_empty()),
        }
    }
}
