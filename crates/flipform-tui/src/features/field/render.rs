//! Input field rendering.
//!
//! One control: rounded border, leading icon, then either the typed text
//! (masked for passwords) or the placeholder in a muted color.

use flipform_core::Icon;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::FieldBuffer;
use crate::common::palette;
use crate::common::text::{truncate_start_with_ellipsis, truncate_with_ellipsis};

/// Rows taken by one field (border, text, border).
pub const FIELD_HEIGHT: u16 = 3;

/// Glyph drawn in front of the field text.
pub fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::User => "👤",
        Icon::Lock => "🔒",
        Icon::Mail => "📧",
    }
}

/// Renders a single input field into `area`.
pub fn render_field(frame: &mut Frame, area: Rect, field: &FieldBuffer, focused: bool) {
    if area.width < 3 || area.height == 0 {
        return;
    }

    let border_color = if focused {
        palette::TEXT
    } else {
        palette::BORDER
    };
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(palette::FIELD_BG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(Paragraph::new(field_line(field, focused, inner.width)), inner);
}

fn field_line(field: &FieldBuffer, focused: bool, width: u16) -> Line<'static> {
    let icon = icon_glyph(field.spec().icon);
    let muted = Style::default().fg(palette::MUTED);
    let cursor = Span::styled("█", Style::default().fg(palette::TEXT));

    // " <icon> <text>" with one column kept for the cursor.
    let prefix_width = 1 + icon.width() + 1;
    let max_text = (width as usize).saturating_sub(prefix_width + 1);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(icon, muted),
        Span::raw(" "),
    ];

    if field.is_empty() {
        if focused {
            spans.push(cursor);
        }
        spans.push(Span::styled(
            truncate_with_ellipsis(field.spec().placeholder, max_text),
            muted,
        ));
    } else {
        spans.push(Span::styled(
            truncate_start_with_ellipsis(&field.display_text(), max_text),
            Style::default().fg(palette::TEXT).add_modifier(Modifier::BOLD),
        ));
        if focused {
            spans.push(cursor);
        }
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use flipform_core::form::{PASSWORD_FIELD, USERNAME_FIELD};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::preview::buffer_lines;

    fn draw(field: &FieldBuffer, focused: bool) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(30, FIELD_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_field(frame, frame.area(), field, focused))
            .unwrap();
        buffer_lines(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_field_shows_placeholder() {
        let lines = draw(&FieldBuffer::new(USERNAME_FIELD), false);
        assert!(lines[0].starts_with('╭'));
        assert!(lines[1].contains("Username"));
        assert!(lines[2].starts_with('╰'));
    }

    #[test]
    fn test_password_text_is_masked_on_screen() {
        let mut field = FieldBuffer::new(PASSWORD_FIELD);
        field.insert_str("secret");
        let lines = draw(&field, true);
        assert!(lines[1].contains("••••••█"));
        assert!(!lines[1].contains("secret"));
        assert!(!lines[1].contains("Password"));
    }
}
