//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (DEBUG, NOCOLOR)
//!     → loader.rs (read once, at the caller's composition root)
//!     → DebugConfig (plain value)
//!     → passed into Logger construction
//!
//! Tooling:
//!     validation.rs reports malformed allow-list entries
//! ```
//!
//! # Design Decisions
//! - The core never reads the environment itself; it is handed a DebugConfig
//! - Unset and empty are the same: nothing is enabled
//! - No configuration files

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::{DebugConfig, ALLOW_LIST_VAR, NO_COLOR_VAR};
pub use validation::{validate_allow_list, validate_config};
