//! Shared helpers for the TUI.

pub mod palette;
pub mod text;
