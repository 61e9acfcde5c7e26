//! Pure view/render functions for the TUI.
//!
//! `render` reads `&AppState` and draws to a ratatui `Frame`. The only state
//! it writes is the hit map (through its `RefCell`), which records where the
//! active card's controls ended up on screen.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::flip::FlipFace;
use crate::form::render_card_face;
use crate::starfield::render_starfield;
use crate::state::AppState;
use crate::statusline::{STATUS_HEIGHT, render_debug_status_line};

/// Renders the whole screen: starfield, card face, optional status line.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let status_height = if app.show_debug_status {
        STATUS_HEIGHT
    } else {
        0
    };
    let [scene, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(status_height)]).areas(area);

    render_starfield(frame, scene, &app.starfield, app.clock);

    let face = app
        .flip
        .as_ref()
        .map_or(FlipFace::Active { angle_deg: 0.0 }, |flip| flip.face(app.clock));

    let mut hits = app.hit_map.borrow_mut();
    hits.clear();

    if let Some(factor) = face.width_factor() {
        match face {
            FlipFace::Outgoing { .. } => {
                if let Some(flip) = app.flip.as_ref() {
                    render_card_face(frame, scene, flip.outgoing(), factor, None);
                }
            }
            FlipFace::Active { .. } => {
                render_card_face(frame, scene, app.form.card(), factor, Some(&mut *hits));
            }
        }
    }

    if app.show_debug_status {
        render_debug_status_line(frame, status, app);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use flipform_core::FormMode;
    use flipform_core::config::Config;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::form::Control;
    use crate::preview::buffer_lines;
    use crate::update::toggle_mode;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_lines(terminal.backend().buffer()).join("\n")
    }

    #[test]
    fn test_initial_screen_is_login() {
        let app = AppState::new(&Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Login"));
        assert!(screen.contains("Username"));
        assert!(screen.contains("Password"));
        assert!(screen.contains("Remember me"));
        assert!(screen.contains("Forgot Password?"));
        assert!(!screen.contains("Email"));
        assert!(app.hit_map.borrow().area_of(Control::ToggleMode).is_some());
    }

    #[test]
    fn test_settled_register_screen() {
        let mut app = AppState::new(&Config::default());
        toggle_mode(&mut app);
        app.clock += Duration::from_secs(1);

        let screen = draw(&app);
        assert!(screen.contains("Already have an account? Login"));
        assert!(screen.contains("Email"));
        assert!(!screen.contains("Remember me"));
        assert!(!screen.contains("Forgot Password?"));
    }

    #[test]
    fn test_exit_half_shows_outgoing_card_without_hits() {
        let mut app = AppState::new(&Config::default());
        toggle_mode(&mut app);
        app.clock += Duration::from_millis(100);

        let screen = draw(&app);
        assert_eq!(app.form.mode(), FormMode::Register);
        // The replaced Login card is still turning away.
        assert!(screen.contains("Remember"));
        assert!(app.hit_map.borrow().area_of(Control::Submit).is_none());
    }

    #[test]
    fn test_retoggle_during_exit_never_shows_hidden_card() {
        let mut app = AppState::new(&Config::default());
        toggle_mode(&mut app);
        app.clock += Duration::from_millis(150);
        assert!(draw(&app).contains("Remember"));

        toggle_mode(&mut app);
        for _ in 0..60 {
            let screen = draw(&app);
            assert!(!screen.contains("Email"), "register card drawn at {:?}", app.clock);
            app.clock += Duration::from_millis(16);
        }
        assert!(draw(&app).contains("Remember me"));
        assert_eq!(app.form.mode(), FormMode::Login);
    }

    #[test]
    fn test_edge_on_moment_hides_both_faces() {
        let mut app = AppState::new(&Config::default());
        toggle_mode(&mut app);
        // End of the exit half: outgoing card is at 180°, back face only.
        app.clock += Duration::from_millis(399);

        let screen = draw(&app);
        assert!(!screen.contains("Username"));
    }

    #[test]
    fn test_debug_status_line() {
        let mut app = AppState::new(&Config::default());
        app.show_debug_status = true;
        let screen = draw(&app);
        let last = screen.lines().last().unwrap();
        assert!(last.contains("mode Login"));
        assert!(last.contains("flip settled"));
        assert!(last.contains("stars 50"));
        assert!(last.contains("frames 0"));
    }
}
