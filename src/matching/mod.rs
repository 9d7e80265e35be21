//! Tag enablement subsystem.
//!
//! # Data Flow
//! ```text
//! raw allow-list ("db:*,cache")
//!     → split on ','
//!     → matcher.rs (compile each entry: exact | wildcard | invalid)
//!     → OR over entries, stop at first match
//!     → enabled: bool
//! ```
//!
//! # Design Decisions
//! - Decided once per logger, never re-evaluated
//! - One malformed entry cannot disable the others

pub mod matcher;

pub use matcher::{is_enabled, AllowList, Pattern, PatternError};
