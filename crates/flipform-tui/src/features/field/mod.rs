//! Input field feature slice.
//!
//! - `state.rs`: `FieldBuffer`, the card-local text of one control
//! - `render.rs`: rounded input control with leading icon and placeholder

mod render;
mod state;

pub use render::{FIELD_HEIGHT, icon_glyph, render_field};
pub use state::FieldBuffer;
