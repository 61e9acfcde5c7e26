//! Form card rendering.
//!
//! Draws one card face: title, fields, login-only extras, submit button and
//! the toggle prompt. A width factor below 1.0 squashes the card around its
//! center to project the flip rotation onto the terminal grid.

use flipform_core::FormMode;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{CardState, Control, HitMap};
use crate::common::palette;
use crate::field::{FIELD_HEIGHT, render_field};

/// Card width when fully facing the viewer.
pub const CARD_WIDTH: u16 = 44;

const BUTTON_HEIGHT: u16 = 3;
const FORGOT_LABEL: &str = "Forgot Password?";

/// Total card height for `mode`, borders included.
pub fn card_height(mode: FormMode) -> u16 {
    body_constraints(mode)
        .iter()
        .map(|c| match c {
            Constraint::Length(n) => *n,
            _ => 0,
        })
        .sum::<u16>()
        + 4
}

/// Rows inside the card: title, gap, fields, [extras], gap, submit, gap, toggle.
fn body_constraints(mode: FormMode) -> Vec<Constraint> {
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(mode.fields().iter().map(|_| Constraint::Length(FIELD_HEIGHT)));
    if mode.shows_login_extras() {
        constraints.push(Constraint::Length(1));
    }
    constraints.extend([
        Constraint::Length(1),
        Constraint::Length(BUTTON_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(1),
    ]);
    constraints
}

/// Screen rect of a card for `mode` at the given width factor.
pub fn card_area(area: Rect, mode: FormMode, width_factor: f32) -> Rect {
    let full_width = CARD_WIDTH.min(area.width.saturating_sub(2));
    let width = (f32::from(full_width) * width_factor.clamp(0.0, 1.0)).round() as u16;
    let height = card_height(mode).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Renders one card face centered in `area`.
///
/// When `hits` is provided, the screen areas of the card's controls are
/// recorded for mouse routing.
pub fn render_card_face(
    frame: &mut Frame,
    area: Rect,
    card: &CardState,
    width_factor: f32,
    mut hits: Option<&mut HitMap>,
) {
    let card_rect = card_area(area, card.mode(), width_factor);
    if card_rect.width < 2 || card_rect.height < 2 {
        return;
    }

    frame.render_widget(Clear, card_rect);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER))
        .style(Style::default().bg(palette::CARD_BG));
    let inner = block.inner(card_rect).inner(Margin::new(2, 1));
    frame.render_widget(block, card_rect);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let mode = card.mode();
    let rows = Layout::vertical(body_constraints(mode)).split(inner);
    let mut row = rows.iter().copied();
    let mut next_row = || row.next().unwrap_or_default();

    render_title(frame, next_row(), mode);
    next_row();

    for (idx, field) in card.fields().iter().enumerate() {
        let field_area = next_row();
        render_field(
            frame,
            field_area,
            field,
            card.is_focused(Control::Field(idx)),
        );
        record(&mut hits, Control::Field(idx), field_area);
    }

    if mode.shows_login_extras() {
        let (remember, forgot) = render_login_extras(frame, next_row(), card);
        record(&mut hits, Control::RememberMe, remember);
        record(&mut hits, Control::ForgotPassword, forgot);
    }

    next_row();
    let submit_area = next_row();
    render_submit(frame, submit_area, mode, card.is_focused(Control::Submit));
    record(&mut hits, Control::Submit, submit_area);

    next_row();
    let link = render_toggle_row(
        frame,
        next_row(),
        mode,
        card.is_focused(Control::ToggleMode),
    );
    record(&mut hits, Control::ToggleMode, link);
}

fn record(hits: &mut Option<&mut HitMap>, control: Control, area: Rect) {
    if let Some(hits) = hits.as_deref_mut() {
        hits.push(control, area);
    }
}

fn focus_style(base: Style, focused: bool) -> Style {
    if focused {
        base.fg(palette::TEXT)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        base
    }
}

fn render_title(frame: &mut Frame, area: Rect, mode: FormMode) {
    let title = Paragraph::new(Line::from(Span::styled(
        mode.title(),
        Style::default()
            .fg(palette::TEXT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Draws "[ ] Remember me" on the left and "Forgot Password?" on the right.
/// Returns the areas of both controls.
fn render_login_extras(frame: &mut Frame, area: Rect, card: &CardState) -> (Rect, Rect) {
    let muted = Style::default().fg(palette::MUTED);
    let check = if card.remember_me() { "[x]" } else { "[ ]" };
    let remember_label = format!("{check} Remember me");

    let forgot_width = (FORGOT_LABEL.width() as u16).min(area.width);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(forgot_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            remember_label.clone(),
            focus_style(muted, card.is_focused(Control::RememberMe)),
        )),
        left,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            FORGOT_LABEL,
            focus_style(muted, card.is_focused(Control::ForgotPassword)),
        )),
        right,
    );

    let remember_area = Rect::new(
        left.x,
        left.y,
        (remember_label.width() as u16).min(left.width),
        1,
    );
    (remember_area, right)
}

fn render_submit(frame: &mut Frame, area: Rect, mode: FormMode, focused: bool) {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::TEXT))
        .style(Style::default().bg(palette::TEXT).fg(palette::BUTTON_FG));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let label = if focused {
        format!("▸ {} ◂", mode.title())
    } else {
        mode.title().to_string()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            label,
            Style::default()
                .fg(palette::BUTTON_FG)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner,
    );
}

/// Draws the centered "<prompt> <link>" row. Returns the link area.
fn render_toggle_row(frame: &mut Frame, area: Rect, mode: FormMode, focused: bool) -> Rect {
    let prompt = mode.toggle_prompt();
    let link = mode.toggle_label();
    let link_style = Style::default()
        .fg(palette::TEXT)
        .add_modifier(Modifier::BOLD);

    let line = Line::from(vec![
        Span::styled(prompt, Style::default().fg(palette::MUTED)),
        Span::raw(" "),
        Span::styled(link, focus_style(link_style, focused)),
    ]);
    let total = line.width() as u16;
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);

    let start = area.x + area.width.saturating_sub(total) / 2;
    let link_x = start + prompt.width() as u16 + 1;
    let right = area.x + area.width;
    if link_x >= right {
        return Rect::default();
    }
    Rect::new(link_x, area.y, (link.width() as u16).min(right - link_x), 1)
}
