//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! This is the "Elm runtime" boundary. The reducer stays pure and returns
//! effects; terminal I/O happens only here.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use flipform_core::config::Config;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::terminal::{self, TerminalSession};
use crate::{render, update};

/// Tick cadence while a flip is animating (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Tick cadence otherwise; enough for the twinkle loop.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
pub struct TuiRuntime {
    session: TerminalSession,
    /// Application state.
    pub state: AppState,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a render occurred (for FPS calculation).
    last_render: Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Sets up the terminal and mounts the component.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be put into TUI mode.
    pub fn new(config: &Config) -> Result<Self> {
        terminal::install_panic_hook();
        let session = TerminalSession::start().context("Failed to setup terminal")?;

        let now = Instant::now();
        Ok(Self {
            session,
            state: AppState::new(config),
            last_tick: now,
            last_render: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the reducer asks to quit.
    ///
    /// # Errors
    /// Returns an error if polling, reading or drawing the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                // Only Tick triggers render; input batches until the next tick.
                if matches!(&event, UiEvent::Tick { .. }) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty && !self.state.should_quit {
                let frame_ms =
                    self.last_render.elapsed().as_millis().min(u128::from(u16::MAX)) as u16;
                self.last_render = Instant::now();

                let state = &self.state;
                self.session
                    .terminal_mut()
                    .draw(|frame| render::render(state, frame))
                    .context("Failed to draw frame")?;
                dirty = false;

                self.state.status_line.on_frame(frame_ms);
            }
        }

        tracing::info!(mode = %self.state.form.mode(), "event loop finished");
        Ok(())
    }

    /// Collects terminal events and, when due, a Tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if self.state.is_flipping() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Block until the next tick is due, then drain whatever else is queued.
        let mut timeout = tick_interval.saturating_sub(self.last_tick.elapsed());
        while event::poll(timeout).context("Failed to poll terminal events")? {
            let term_event = event::read().context("Failed to read terminal event")?;
            events.push(UiEvent::Terminal(term_event));
            timeout = Duration::ZERO;
        }

        let since_tick = self.last_tick.elapsed();
        if since_tick >= tick_interval {
            events.push(UiEvent::Tick {
                elapsed: since_tick,
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                tracing::debug!("quit requested");
                self.state.should_quit = true;
            }
        }
    }
}
