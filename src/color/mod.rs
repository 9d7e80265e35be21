//! Tag color subsystem.
//!
//! # Data Flow
//! ```text
//! Logger enabled and color not suppressed
//!     → ColorPicker strategy:
//!         - picker.rs RandomPicker (production)
//!         - picker.rs SeededPicker / FixedPicker (reproducible output)
//!     → palette.rs colorize(code, "tag ")
//!     → fixed prefix
//! ```
//!
//! # Design Decisions
//! - Palette is a process-wide constant, read-only
//! - Every palette entry is selectable

pub mod palette;
pub mod picker;

pub use palette::{colorize, has_escape, PALETTE};
pub use picker::{FixedPicker, RandomPicker, SeededPicker};

/// Strategy for choosing a tag color.
pub trait ColorPicker: Send + Sync + std::fmt::Debug {
    /// Pick one entry of `palette`. `None` only when there is nothing to pick.
    fn pick(&self, palette: &[u8]) -> Option<u8>;
}
