//! Starfield background feature slice.
//!
//! - `state.rs`: cached decorative points and the twinkle loop
//! - `render.rs`: gradient backdrop and star glyphs

mod render;
mod state;

pub use render::{render_starfield, star_position};
pub use state::{StarfieldState, Twinkle};
