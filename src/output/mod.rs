//! Output subsystem.
//!
//! # Data Flow
//! ```text
//! logging call
//!     → pretty.rs (value or format args → possibly multi-line text)
//!     → emitter.rs (split on '\n')
//!     → sink.rs (one prefixed record per line → stderr)
//! ```
//!
//! # Design Decisions
//! - Multi-line values become several prefixed lines, never embedded newlines
//! - Nothing is buffered between calls
//! - Writes are line-atomic only

pub mod emitter;
pub mod pretty;
pub mod sink;

pub use emitter::{emit, split_lines};
pub use pretty::{DebugPretty, PrettyPrinter};
pub use sink::{MemorySink, Sink, SinkFactory, StderrSink};
