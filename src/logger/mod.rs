//! Tagged debug logger.
//!
//! # Data Flow
//! ```text
//! Logger construction (tag, DebugConfig)
//!     → matching (is the tag allowed?)
//!     → color (pick a palette color unless suppressed)
//!     → prefix "tag " (colorized or plain), bound into the sink
//!
//! Logging call
//!     → disabled: return
//!     → enabled: pretty-print → split lines → one record per line
//! ```
//!
//! # Design Decisions
//! - Enablement, color and prefix are fixed at construction
//! - A disabled logger has no sink and never formats anything
//! - Logging never fails and never panics on a bad `Debug` impl

pub mod builder;
mod macros;

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::config::DebugConfig;
use crate::output::{emit, PrettyPrinter, Sink};

pub use builder::LoggerBuilder;

/// A debug logger bound to one tag.
pub struct Logger {
    tag: String,
    enabled: bool,
    color: Option<u8>,
    prefix: String,
    sink: Option<Box<dyn Sink>>,
    printer: Arc<dyn PrettyPrinter>,
}

impl Logger {
    /// Create a logger configured from the `DEBUG` and `NOCOLOR` environment variables.
    ///
    /// The environment is read on every call. A value that is not valid
    /// unicode counts as unset, so a non-unicode `DEBUG` leaves the logger
    /// disabled; use [`DebugConfig::try_from_env`] to surface that case.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_config(tag, DebugConfig::from_env())
    }

    /// Create a logger from an explicit config, writing to stderr.
    pub fn with_config(tag: impl Into<String>, config: DebugConfig) -> Self {
        LoggerBuilder::new(tag).config(config).build()
    }

    pub fn builder(tag: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(tag)
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Palette color of the prefix, if colored.
    pub fn color(&self) -> Option<u8> {
        self.color
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Log a format string. Prefer the [`logf!`](crate::logf) macro.
    ///
    /// The formatted text is written one line per record.
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let Some(sink) = self.sink.as_deref() else {
            return;
        };

        if let Some(text) = self.render(|| self.printer.pretty_args(args)) {
            emit(sink, &text);
        }
    }

    /// Pretty-print each value on its own. Prefer the [`logln!`](crate::logln) macro.
    ///
    /// Every value is formatted separately and all of its lines are written
    /// before the next value is formatted.
    pub fn println(&self, values: &[&dyn fmt::Debug]) {
        let Some(sink) = self.sink.as_deref() else {
            return;
        };

        for value in values {
            if let Some(text) = self.render(|| self.printer.pretty(*value)) {
                emit(sink, &text);
            }
        }
    }

    /// Alias for [`Logger::println`].
    pub fn log(&self, values: &[&dyn fmt::Debug]) {
        self.println(values);
    }

    /// Run the printer, turning both `fmt::Error` and a panicking `Debug`
    /// impl into a dropped record.
    fn render<F>(&self, format: F) -> Option<String>
    where
        F: FnOnce() -> Result<String, fmt::Error>,
    {
        match panic::catch_unwind(AssertUnwindSafe(format)) {
            Ok(Ok(text)) => Some(text),
            Ok(Err(_)) => {
                tracing::debug!(tag = %self.tag, "formatting failed, record dropped");
                None
            }
            Err(_) => {
                tracing::debug!(tag = %self.tag, "formatter panicked, record dropped");
                None
            }
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("enabled", &self.enabled)
            .field("color", &self.color)
            .finish_non_exhaustive()
    }
}
