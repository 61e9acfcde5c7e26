//! Full-screen TUI for flipform: a flip-animated Login/Register card over a
//! twinkling starfield.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod preview;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{field, flip, form, starfield, statusline};
use flipform_core::config::Config;
pub use preview::render_preview;
pub use runtime::TuiRuntime;

/// Runs the interactive form until the user quits.
///
/// # Errors
/// Fails when stdout is not a terminal or terminal I/O fails.
pub fn run_interactive(config: &Config) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "flipform needs a terminal.\n\
             Use `flipform preview` to render a frame as plain text."
        );
    }

    tracing::info!(
        stars = config.star_count,
        flip_ms = config.flip_duration_ms,
        "starting TUI"
    );

    let mut runtime = TuiRuntime::new(config)
        .inspect_err(|err| tracing::error!("terminal setup failed: {err:#}"))?;
    let result = runtime.run();
    // Leave the alternate screen before the caller prints anything.
    drop(runtime);
    result
}
