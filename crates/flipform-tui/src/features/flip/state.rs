//! Flip transition state.
//!
//! A toggle plays two halves back to back, each lasting the configured
//! duration: the replaced card rotates out from 0° to ±180°, then the new card
//! rotates in from ∓180° to 0°. Each mode owns a side: Login turns through
//! +180°, Register through −180°, so Login→Register and Register→Login spin
//! in opposite directions.

use std::time::Duration;

use flipform_core::FormMode;

use crate::form::CardState;

/// Faces turned past this angle show their (hidden) back.
const EDGE_ON_DEG: f32 = 90.0;

/// Which way the card spins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipDirection {
    /// Login → Register; angles increase.
    Forward,
    /// Register → Login; angles decrease.
    Backward,
}

impl FlipDirection {
    pub fn towards(incoming: FormMode) -> Self {
        match incoming {
            FormMode::Register => FlipDirection::Forward,
            FormMode::Login => FlipDirection::Backward,
        }
    }
}

/// Where a transition is at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipPhase {
    Exit,
    Enter,
    Settled,
}

impl FlipPhase {
    pub fn label(self) -> &'static str {
        match self {
            FlipPhase::Exit => "exit",
            FlipPhase::Enter => "enter",
            FlipPhase::Settled => "settled",
        }
    }
}

/// Which card face to draw, and how far it is turned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlipFace {
    /// The replaced card, still animating out.
    Outgoing { angle_deg: f32 },
    /// The active card.
    Active { angle_deg: f32 },
}

impl FlipFace {
    pub fn angle_deg(self) -> f32 {
        match self {
            FlipFace::Outgoing { angle_deg } | FlipFace::Active { angle_deg } => angle_deg,
        }
    }

    /// Fraction of the card width still visible, or `None` when the back
    /// face is toward the viewer.
    pub fn width_factor(self) -> Option<f32> {
        let angle = self.angle_deg();
        if angle.abs() >= EDGE_ON_DEG {
            return None;
        }
        Some(angle.to_radians().cos().abs())
    }
}

/// Rotation sign of the side a mode lives on.
fn side(mode: FormMode) -> f32 {
    match mode {
        FormMode::Login => 1.0,
        FormMode::Register => -1.0,
    }
}

/// Cubic ease-in-out on `t ∈ [0, 1]`.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One running flip between two cards.
#[derive(Debug, Clone)]
pub struct FlipTransition {
    outgoing: CardState,
    incoming: FormMode,
    started_at: Duration,
    /// Time already counted as played when the transition starts.
    skipped: Duration,
    half: Duration,
}

impl FlipTransition {
    /// Starts a flip at `now`, replacing `outgoing` with a card for `incoming`.
    pub fn start(outgoing: CardState, incoming: FormMode, now: Duration, half: Duration) -> Self {
        Self {
            outgoing,
            incoming,
            started_at: now,
            skipped: Duration::ZERO,
            half: half.max(Duration::from_millis(1)),
        }
    }

    /// Turns the exiting card back toward the viewer.
    ///
    /// `hidden` is the card mounted by the toggle being undone. It was never
    /// drawn and becomes the (undrawn) outgoing side. The returned card is
    /// the one that was turning away; it re-enters from the angle it had
    /// reached, so the motion stays continuous. Call only during `Exit`.
    pub fn reverse(&mut self, hidden: CardState, now: Duration) -> CardState {
        let exited = self.elapsed(now).min(self.half);
        let returning = std::mem::replace(&mut self.outgoing, hidden);
        self.incoming = returning.mode();
        self.started_at = now;
        // ease(1 - t) = 1 - ease(t): entering at `half - exited` matches the exit angle.
        self.skipped = self.total() - exited;
        returning
    }

    pub fn outgoing(&self) -> &CardState {
        &self.outgoing
    }

    pub fn incoming(&self) -> FormMode {
        self.incoming
    }

    pub fn direction(&self) -> FlipDirection {
        FlipDirection::towards(self.incoming)
    }

    /// Total length of the transition (both halves).
    pub fn total(&self) -> Duration {
        self.half * 2
    }

    pub fn phase(&self, now: Duration) -> FlipPhase {
        let elapsed = self.elapsed(now);
        if elapsed >= self.total() {
            FlipPhase::Settled
        } else if elapsed >= self.half {
            FlipPhase::Enter
        } else {
            FlipPhase::Exit
        }
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.phase(now) == FlipPhase::Settled
    }

    /// Face to draw at `now`.
    pub fn face(&self, now: Duration) -> FlipFace {
        let elapsed = self.elapsed(now);
        match self.phase(now) {
            FlipPhase::Exit => {
                let t = ease_in_out(self.progress(elapsed));
                FlipFace::Outgoing {
                    angle_deg: side(self.outgoing.mode()) * 180.0 * t,
                }
            }
            FlipPhase::Enter => {
                let t = ease_in_out(self.progress(elapsed - self.half));
                FlipFace::Active {
                    angle_deg: side(self.incoming) * 180.0 * (1.0 - t),
                }
            }
            FlipPhase::Settled => FlipFace::Active { angle_deg: 0.0 },
        }
    }

    fn elapsed(&self, now: Duration) -> Duration {
        now.saturating_sub(self.started_at) + self.skipped
    }

    fn progress(&self, elapsed_in_half: Duration) -> f32 {
        (elapsed_in_half.as_secs_f32() / self.half.as_secs_f32()).clamp(0.0, 1.0)
    }
}
