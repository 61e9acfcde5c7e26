//! Form card reducer.
//!
//! Key handling edits the mounted card only. Anything that reaches beyond the
//! card (mode toggle, quit) comes back as a `FormCommand` for the top-level
//! reducer to apply.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{CardState, Control};

/// Request raised by the card for the top-level reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    None,
    ToggleMode,
    Quit,
}

/// Handles one key press on the active card.
pub fn handle_key(card: &mut CardState, key: KeyEvent) -> FormCommand {
    if key.kind == KeyEventKind::Release {
        return FormCommand::None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Esc => FormCommand::Quit,
        KeyCode::Char('c') if ctrl => FormCommand::Quit,
        KeyCode::Char('t') if ctrl => FormCommand::ToggleMode,
        KeyCode::Tab | KeyCode::Down => {
            card.focus_next();
            FormCommand::None
        }
        KeyCode::BackTab | KeyCode::Up => {
            card.focus_prev();
            FormCommand::None
        }
        KeyCode::Enter => {
            let focused = card.focused();
            activate(card, focused)
        }
        KeyCode::Backspace => {
            if let Some(field) = card.focused_field_mut() {
                field.backspace();
            }
            FormCommand::None
        }
        KeyCode::Char(' ') if !matches!(card.focused(), Control::Field(_)) => {
            let focused = card.focused();
            activate(card, focused)
        }
        KeyCode::Char(ch) if !ctrl && !alt => {
            if let Some(field) = card.focused_field_mut() {
                field.insert_char(ch);
            }
            FormCommand::None
        }
        _ => FormCommand::None,
    }
}

/// Pastes text into the focused field; ignored when a button has focus.
pub fn handle_paste(card: &mut CardState, text: &str) {
    if let Some(field) = card.focused_field_mut() {
        field.insert_str(text);
    }
}

/// Handles a click on `control`: focus it, then activate it.
pub fn handle_click(card: &mut CardState, control: Control) -> FormCommand {
    if !card.focus_control(control) {
        return FormCommand::None;
    }
    activate(card, control)
}

/// Activates a control.
///
/// Only the toggle link leaves the card. Submit and Forgot-password are inert.
pub fn activate(card: &mut CardState, control: Control) -> FormCommand {
    match control {
        Control::Field(_) => FormCommand::None,
        Control::RememberMe => {
            card.toggle_remember_me();
            FormCommand::None
        }
        Control::ForgotPassword => {
            tracing::debug!(mode = %card.mode(), "forgot password pressed (inert)");
            FormCommand::None
        }
        Control::Submit => {
            tracing::debug!(mode = %card.mode(), "submit ignored");
            FormCommand::None
        }
        Control::ToggleMode => FormCommand::ToggleMode,
    }
}
