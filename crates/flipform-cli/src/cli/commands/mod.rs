//! CLI command handlers.

pub mod config;
pub mod preview;
pub mod run;
pub mod stars;
