//! Configuration validation.
//!
//! # Responsibilities
//! - Report allow-list entries that cannot be compiled
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Advisory only: logger construction never calls this and never fails

use crate::config::schema::DebugConfig;
use crate::matching::{AllowList, PatternError};

/// Validate a raw allow-list.
pub fn validate_allow_list(raw: &str) -> Result<(), Vec<PatternError>> {
    let errors: Vec<PatternError> = AllowList::parse(raw).errors().cloned().collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a full config.
pub fn validate_config(config: &DebugConfig) -> Result<(), Vec<PatternError>> {
    validate_allow_list(&config.allow_list)
}
