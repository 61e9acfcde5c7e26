//! Feature slices for the TUI (state/update/render per slice).

pub mod field;
pub mod flip;
pub mod form;
pub mod starfield;
pub mod statusline;
