//! Off-screen rendering.
//!
//! Draws one settled frame into ratatui's `TestBackend` and returns it as
//! plain text. Backs `flipform preview` and the render tests.

use anyhow::{Context, Result};
use flipform_core::FormMode;
use flipform_core::config::Config;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

use crate::render;
use crate::state::AppState;

/// Renders `mode` at `width`×`height` and returns the frame as text lines.
///
/// # Errors
/// Returns an error if the off-screen terminal cannot be created or drawn.
pub fn render_preview(config: &Config, mode: FormMode, width: u16, height: u16) -> Result<String> {
    anyhow::ensure!(width > 0 && height > 0, "Preview size must be non-zero");

    let app = AppState::with_mode(config, mode);
    let mut terminal = Terminal::new(TestBackend::new(width, height))
        .context("Failed to create off-screen terminal")?;
    terminal
        .draw(|frame| render::render(&app, frame))
        .context("Failed to draw preview frame")?;

    Ok(buffer_lines(terminal.backend().buffer()).join("\n"))
}

/// Converts a buffer to one string per row, trailing spaces trimmed.
///
/// Wide glyphs occupy two cells; the trailing cell is skipped.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.y + area.height)
        .map(|y| {
            let mut line = String::new();
            let mut skip = 0usize;
            for x in area.x..area.x + area.width {
                if skip > 0 {
                    skip -= 1;
                    continue;
                }
                let symbol = buffer[(x, y)].symbol();
                skip = symbol.width().saturating_sub(1);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}
