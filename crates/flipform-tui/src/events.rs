//! Events fed into the reducer.

use std::time::Duration;

use crossterm::event::Event;

/// Input to `update::update`.
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Animation tick; `elapsed` is the wall-clock time since the previous tick.
    Tick { elapsed: Duration },
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(Event),
}
