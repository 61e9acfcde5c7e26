//! Application state composition.
//!
//! ```text
//! AppState
//! ├── form: FormState            (mode flag + mounted card)
//! ├── flip: Option<FlipTransition> (running card flip, if any)
//! ├── starfield: StarfieldState  (cached decorative points)
//! ├── clock: Duration            (animation time since mount)
//! ├── status_line                (debug FPS accumulator)
//! └── hit_map: RefCell<HitMap>   (control areas, written during render)
//! ```
//!
//! Time only moves through `UiEvent::Tick`, so state transitions are
//! deterministic given the same event sequence.

use std::cell::RefCell;
use std::time::Duration;

use flipform_core::FormMode;
use flipform_core::config::Config;

use crate::flip::{FlipPhase, FlipTransition};
use crate::form::{FormState, HitMap};
use crate::starfield::StarfieldState;
use crate::statusline::StatusLineAccumulator;

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Mode flag and the card mounted for it.
    pub form: FormState,
    /// Running flip transition. `None` once settled.
    pub flip: Option<FlipTransition>,
    /// Background point set, generated once at construction.
    pub starfield: StarfieldState,
    /// Animation clock, advanced by ticks.
    pub clock: Duration,
    /// Duration of each flip half.
    pub flip_duration: Duration,
    /// Whether to show the debug status line.
    pub show_debug_status: bool,
    /// Frame rate accumulator for the debug status line.
    pub status_line: StatusLineAccumulator,
    /// Control areas of the active card (set during render, used for mouse routing).
    pub hit_map: RefCell<HitMap>,
}

impl AppState {
    /// Mounts the component in its initial (Login) mode.
    pub fn new(config: &Config) -> Self {
        Self::with_mode(config, FormMode::default())
    }

    /// Mounts the component directly in `mode`, with no transition running.
    pub fn with_mode(config: &Config, mode: FormMode) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(mode),
            flip: None,
            starfield: StarfieldState::new(config.star_count, config.twinkle_period()),
            clock: Duration::ZERO,
            flip_duration: config.flip_duration(),
            show_debug_status: config.show_debug_status,
            status_line: StatusLineAccumulator::new(),
            hit_map: RefCell::new(HitMap::default()),
        }
    }

    /// Phase of the running flip, `Settled` when none is running.
    pub fn flip_phase(&self) -> FlipPhase {
        self.flip
            .as_ref()
            .map_or(FlipPhase::Settled, |flip| flip.phase(self.clock))
    }

    /// Returns true while a flip is animating.
    pub fn is_flipping(&self) -> bool {
        self.flip_phase() != FlipPhase::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_settled_login() {
        let app = AppState::new(&Config::default());
        assert_eq!(app.form.mode(), FormMode::Login);
        assert!(app.flip.is_none());
        assert!(!app.is_flipping());
        assert_eq!(app.starfield.points().len(), 50);
        assert_eq!(app.flip_duration, Duration::from_millis(400));
    }

    #[test]
    fn test_star_count_comes_from_config() {
        let config = Config {
            star_count: 7,
            ..Config::default()
        };
        let app = AppState::with_mode(&config, FormMode::Register);
        assert_eq!(app.starfield.points().len(), 7);
        assert_eq!(app.form.mode(), FormMode::Register);
    }
}
