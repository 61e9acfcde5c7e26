//! Card flip feature slice.
//!
//! `state.rs` holds the transition clock math. Rendering lives with the card
//! (`form::render_card_face`), which squashes the card horizontally by the
//! face's width factor.

mod state;

pub use state::{FlipDirection, FlipFace, FlipPhase, FlipTransition, ease_in_out};
