//! Status line rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::state::AppState;

/// Height of the debug status line.
pub const STATUS_HEIGHT: u16 = 1;

/// Renders the debug status line into `area`.
pub fn render_debug_status_line(frame: &mut Frame, area: Rect, app: &AppState) {
    let snapshot = app.status_line.snapshot();
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::Cyan);
    let sep = Span::styled(" │ ", label);

    let line = Line::from(vec![
        Span::styled("mode ", label),
        Span::styled(app.form.mode().title(), value),
        sep.clone(),
        Span::styled("flip ", label),
        Span::styled(app.flip_phase().label(), value),
        sep.clone(),
        Span::styled("stars ", label),
        Span::styled(app.starfield.points().len().to_string(), value),
        sep.clone(),
        Span::styled(format!("{:.1} fps", snapshot.fps), value),
        sep,
        Span::styled("frames ", label),
        Span::styled(snapshot.frames.to_string(), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(Color::Black)),
        area,
    );
}
