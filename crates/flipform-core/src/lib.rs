//! Domain model and shared plumbing for flipform.
//!
//! - `starfield`: deterministic decorative point generator
//! - `form`: form modes and the fields each mode renders
//! - `config`: `config.toml` loading
//! - `logging`: file-backed tracing setup

pub mod config;
pub mod form;
pub mod logging;
pub mod starfield;

pub use form::{FieldSpec, FormMode, Icon, InputKind};
pub use starfield::{DecorativePoint, generate_points};
