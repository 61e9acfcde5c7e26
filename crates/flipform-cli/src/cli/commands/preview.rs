//! `flipform preview`: print one settled frame as plain text.

use anyhow::Result;
use flipform_core::FormMode;
use flipform_core::config::Config;

pub fn run(config: &Config, mode: FormMode, width: u16, height: u16) -> Result<()> {
    let frame = flipform_tui::render_preview(config, mode, width, height)?;
    tracing::debug!(%mode, width, height, "rendered preview");
    println!("{frame}");
    Ok(())
}
