//! Prelude module for calendar_grid crate.
//!
//! Re-exports the derive macros shared across modules.

pub use derive_more::Display;
