//! Form card feature slice (state/update/render).
//!
//! ## Module Structure
//!
//! - `state.rs`: `FormState` (mode flag), `CardState` (mounted card), focus ring, hit map
//! - `update.rs`: key, paste and click handling; returns `FormCommand`
//! - `render.rs`: card layout and drawing, including the flip squash
//!
//! The mode only changes through `FormState::toggle`, which remounts the card.

mod render;
mod state;
mod update;

pub use render::{CARD_WIDTH, card_area, card_height, render_card_face};
pub use state::{CardState, Control, FormState, HitMap};
pub use update::{FormCommand, activate, handle_click, handle_key, handle_paste};
