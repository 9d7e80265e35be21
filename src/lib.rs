//! Tagged, environment-gated debug logging.
//!
//! Each [`Logger`] is bound to a tag such as `db:query`. It only writes when
//! the tag matches the comma-separated allow-list in `DEBUG` (exact tags or
//! `*` wildcards). Enabled loggers prefix every stderr line with the tag in a
//! random 256-color, unless `NOCOLOR` is set.
//!
//! ```
//! use taglog::{logf, logln, DebugConfig, Logger};
//!
//! let log = Logger::with_config("db:query", DebugConfig::new("db:*"));
//! logf!(log, "running {}", "SELECT 1");
//! logln!(log, vec![1, 2, 3]);
//! ```

pub mod color;
pub mod config;
pub mod logger;
pub mod matching;
pub mod output;

pub use config::DebugConfig;
pub use logger::{Logger, LoggerBuilder};
pub use matching::is_enabled;
