//! Debug status line feature slice.
//!
//! A one-row bar at the bottom of the screen showing the form mode, the flip
//! phase, star count, a smoothed frame rate and the number of frames drawn.
//! Hidden unless enabled in the config or toggled with F12.

mod render;
mod state;

pub use render::{STATUS_HEIGHT, render_debug_status_line};
pub use state::{StatusLine, StatusLineAccumulator};
