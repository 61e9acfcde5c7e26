//! Interactive mode.

use anyhow::Result;
use flipform_core::config::Config;

pub fn run(config: &Config) -> Result<()> {
    flipform_tui::run_interactive(config)?;
    tracing::info!("goodbye");
    Ok(())
}
