//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::flip::{FlipPhase, FlipTransition};
use crate::form::{self, FormCommand};
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { elapsed } => {
            advance_clock(app, elapsed);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn advance_clock(app: &mut AppState, elapsed: Duration) {
    app.clock = app.clock.saturating_add(elapsed);
    let clock = app.clock;
    if let Some(flip) = app.flip.take_if(|flip| flip.is_settled(clock)) {
        tracing::trace!(mode = %flip.incoming(), "flip settled");
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            form::handle_paste(app.form.card_mut(), &text);
            vec![]
        }
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "terminal resized");
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.kind == KeyEventKind::Press && key.code == KeyCode::F(12) {
        app.show_debug_status = !app.show_debug_status;
        return vec![];
    }

    let command = form::handle_key(app.form.card_mut(), key);
    apply_command(app, command)
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let target = app.hit_map.borrow().control_at(mouse.column, mouse.row);
    let Some(control) = target else {
        return vec![];
    };
    let command = form::handle_click(app.form.card_mut(), control);
    apply_command(app, command)
}

fn apply_command(app: &mut AppState, command: FormCommand) -> Vec<UiEffect> {
    match command {
        FormCommand::None => vec![],
        FormCommand::ToggleMode => {
            toggle_mode(app);
            vec![]
        }
        FormCommand::Quit => vec![UiEffect::Quit],
    }
}

/// Flips the form mode and (re)starts the flip transition.
///
/// During the exit half the card turning away has not been replaced on
/// screen yet, so a toggle turns it back and drops the card that was never
/// drawn. Otherwise the card being swapped out becomes the outgoing face.
pub fn toggle_mode(app: &mut AppState) {
    let phase = app.flip_phase();
    let hidden = app.form.toggle();
    let from = hidden.mode();
    let to = app.form.mode();

    match app.flip.as_mut() {
        Some(flip) if phase == FlipPhase::Exit => {
            let returning = flip.reverse(hidden, app.clock);
            app.form.restore(returning);
        }
        _ => {
            app.flip = Some(FlipTransition::start(
                hidden,
                to,
                app.clock,
                app.flip_duration,
            ));
        }
    }
    // Areas recorded for the old card are stale until the next render.
    app.hit_map.borrow_mut().clear();

    tracing::debug!(%from, %to, phase = phase.label(), "form mode toggled");
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use flipform_core::FormMode;
    use flipform_core::config::Config;
    use ratatui::layout::Rect;

    use super::*;
    use crate::flip::{FlipDirection, FlipPhase};
    use crate::form::Control;

    fn app() -> AppState {
        AppState::new(&Config::default())
    }

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn ctrl_t() -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(
            KeyCode::Char('t'),
            KeyModifiers::CONTROL,
        )))
    }

    fn tick(ms: u64) -> UiEvent {
        UiEvent::Tick {
            elapsed: Duration::from_millis(ms),
        }
    }

    fn placeholders(app: &AppState) -> Vec<&'static str> {
        app.form
            .card()
            .fields()
            .iter()
            .map(|f| f.spec().placeholder)
            .collect()
    }

    fn click(column: u16, row: u16) -> UiEvent {
        UiEvent::Terminal(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_toggle_flips_mode_and_starts_flip() {
        let mut app = app();
        assert!(update(&mut app, ctrl_t()).is_empty());

        assert_eq!(app.form.mode(), FormMode::Register);
        assert_eq!(placeholders(&app), ["Username", "Email", "Password"]);
        let flip = app.flip.as_ref().unwrap();
        assert_eq!(flip.direction(), FlipDirection::Forward);
        assert_eq!(flip.outgoing().mode(), FormMode::Login);
        assert_eq!(app.flip_phase(), FlipPhase::Exit);
    }

    #[test]
    fn test_two_toggles_return_to_initial_fields() {
        let mut app = app();
        let initial = placeholders(&app);
        update(&mut app, ctrl_t());
        update(&mut app, tick(1000));
        update(&mut app, ctrl_t());

        assert_eq!(app.form.mode(), FormMode::Login);
        assert_eq!(placeholders(&app), initial);
        assert_eq!(
            app.flip.as_ref().unwrap().direction(),
            FlipDirection::Backward
        );
    }

    #[test]
    fn test_flip_settles_after_both_halves() {
        let mut app = app();
        update(&mut app, ctrl_t());
        update(&mut app, tick(400));
        assert_eq!(app.flip_phase(), FlipPhase::Enter);
        update(&mut app, tick(399));
        assert!(app.is_flipping());
        update(&mut app, tick(1));
        assert!(app.flip.is_none());
        assert_eq!(app.flip_phase(), FlipPhase::Settled);
    }

    #[test]
    fn test_retoggle_mid_flip_restarts() {
        let mut app = app();
        update(&mut app, ctrl_t());
        update(&mut app, tick(500));
        update(&mut app, ctrl_t());

        assert_eq!(app.form.mode(), FormMode::Login);
        let flip = app.flip.as_ref().unwrap();
        assert_eq!(flip.outgoing().mode(), FormMode::Register);
        assert_eq!(flip.phase(app.clock), FlipPhase::Exit);
    }

    #[test]
    fn test_retoggle_during_exit_brings_card_back() {
        let mut app = app();
        for ch in "kim".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        update(&mut app, ctrl_t());
        update(&mut app, tick(150));
        update(&mut app, ctrl_t());

        assert_eq!(app.form.mode(), FormMode::Login);
        assert_eq!(app.form.card().fields()[0].value(), "kim");
        let flip = app.flip.as_ref().unwrap();
        assert_eq!(flip.incoming(), FormMode::Login);
        assert_eq!(flip.phase(app.clock), FlipPhase::Enter);

        // It turns back in the time it spent turning away.
        update(&mut app, tick(150));
        assert!(app.flip.is_none());
    }

    #[test]
    fn test_many_toggles_only_alternate() {
        let mut app = app();
        for i in 1..=9 {
            update(&mut app, ctrl_t());
            let expected = if i % 2 == 1 {
                FormMode::Register
            } else {
                FormMode::Login
            };
            assert_eq!(app.form.mode(), expected);
            assert_eq!(app.form.card().fields().len(), expected.fields().len());
        }
    }

    #[test]
    fn test_submit_changes_nothing() {
        let mut app = app();
        assert!(app.form.card_mut().focus_control(Control::Submit));
        let effects = update(&mut app, key(KeyCode::Enter));

        assert!(effects.is_empty());
        assert_eq!(app.form.mode(), FormMode::Login);
        assert!(app.flip.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typed_text_is_discarded_on_toggle() {
        let mut app = app();
        for ch in "kim".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        assert_eq!(app.form.card().fields()[0].value(), "kim");

        update(&mut app, ctrl_t());
        update(&mut app, tick(1000));
        update(&mut app, ctrl_t());
        assert_eq!(app.form.card().fields()[0].value(), "");
    }

    #[test]
    fn test_typing_during_flip_goes_to_incoming_card() {
        let mut app = app();
        update(&mut app, ctrl_t());
        update(&mut app, key(KeyCode::Char('z')));

        assert!(app.is_flipping());
        assert_eq!(app.form.card().fields()[0].value(), "z");
        let flip = app.flip.as_ref().unwrap();
        assert_eq!(flip.outgoing().fields()[0].value(), "");
    }

    #[test]
    fn test_escape_requests_quit() {
        let mut app = app();
        assert_eq!(update(&mut app, key(KeyCode::Esc)), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_f12_toggles_debug_status() {
        let mut app = app();
        update(&mut app, key(KeyCode::F(12)));
        assert!(app.show_debug_status);
        update(&mut app, key(KeyCode::F(12)));
        assert!(!app.show_debug_status);
    }

    #[test]
    fn test_click_on_recorded_link_toggles() {
        let mut app = app();
        app.hit_map
            .borrow_mut()
            .push(Control::ToggleMode, Rect::new(30, 20, 8, 1));

        update(&mut app, click(2, 2));
        assert_eq!(app.form.mode(), FormMode::Login);

        update(&mut app, click(33, 20));
        assert_eq!(app.form.mode(), FormMode::Register);
        assert!(app.hit_map.borrow().control_at(33, 20).is_none());
    }

    #[test]
    fn test_paste_lands_in_focused_field() {
        let mut app = app();
        update(&mut app, UiEvent::Terminal(Event::Paste("rosa".to_string())));
        assert_eq!(app.form.card().fields()[0].value(), "rosa");
    }

    #[test]
    fn test_ticks_advance_clock() {
        let mut app = app();
        update(&mut app, tick(16));
        update(&mut app, tick(16));
        assert_eq!(app.clock, Duration::from_millis(32));
    }
}
