//! Form card state.
//!
//! `FormState` owns the mode flag. `CardState` is the mounted card for the
//! active mode: field buffers, the remember-me check, and the focus ring.
//! A card is discarded and remounted on every toggle, so nothing typed into
//! it survives a mode change.

use flipform_core::FormMode;
use ratatui::layout::{Position, Rect};

use crate::field::FieldBuffer;

/// A focusable control on the card, in visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Input field by index into the mode's field list.
    Field(usize),
    RememberMe,
    ForgotPassword,
    Submit,
    ToggleMode,
}

/// Mounted card for one mode.
#[derive(Debug, Clone)]
pub struct CardState {
    mode: FormMode,
    fields: Vec<FieldBuffer>,
    remember_me: bool,
    focus: usize,
}

impl CardState {
    /// Mounts a fresh card for `mode`.
    pub fn mount(mode: FormMode) -> Self {
        Self {
            mode,
            fields: mode.fields().iter().copied().map(FieldBuffer::new).collect(),
            remember_me: false,
            focus: 0,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn fields(&self) -> &[FieldBuffer] {
        &self.fields
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn toggle_remember_me(&mut self) {
        self.remember_me = !self.remember_me;
    }

    /// Focus ring for this card.
    pub fn controls(&self) -> Vec<Control> {
        let mut controls: Vec<Control> = (0..self.fields.len()).map(Control::Field).collect();
        if self.mode.shows_login_extras() {
            controls.push(Control::RememberMe);
            controls.push(Control::ForgotPassword);
        }
        controls.push(Control::Submit);
        controls.push(Control::ToggleMode);
        controls
    }

    pub fn focused(&self) -> Control {
        let controls = self.controls();
        controls[self.focus % controls.len()]
    }

    pub fn is_focused(&self, control: Control) -> bool {
        self.focused() == control
    }

    pub fn focus_next(&mut self) {
        let len = self.controls().len();
        self.focus = (self.focus + 1) % len;
    }

    pub fn focus_prev(&mut self) {
        let len = self.controls().len();
        self.focus = (self.focus + len - 1) % len;
    }

    /// Moves focus to `control` if it exists on this card.
    pub fn focus_control(&mut self, control: Control) -> bool {
        match self.controls().iter().position(|c| *c == control) {
            Some(idx) => {
                self.focus = idx;
                true
            }
            None => false,
        }
    }

    /// Buffer of the focused field, if a field has focus.
    pub fn focused_field_mut(&mut self) -> Option<&mut FieldBuffer> {
        match self.focused() {
            Control::Field(idx) => self.fields.get_mut(idx),
            _ => None,
        }
    }
}

/// Form mode flag plus the card mounted for it.
#[derive(Debug, Clone)]
pub struct FormState {
    card: CardState,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormMode::default())
    }
}

impl FormState {
    pub fn new(mode: FormMode) -> Self {
        Self {
            card: CardState::mount(mode),
        }
    }

    pub fn mode(&self) -> FormMode {
        self.card.mode
    }

    pub fn card(&self) -> &CardState {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut CardState {
        &mut self.card
    }

    /// Flips the mode and remounts the card. Returns the card that was replaced.
    pub fn toggle(&mut self) -> CardState {
        let next = CardState::mount(self.card.mode.toggled());
        std::mem::replace(&mut self.card, next)
    }

    /// Puts back a card that is still mounted for the current mode.
    pub fn restore(&mut self, card: CardState) {
        debug_assert_eq!(card.mode, self.card.mode);
        self.card = card;
    }
}

/// Screen areas of the active card's controls, recorded during render.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    areas: Vec<(Control, Rect)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn push(&mut self, control: Control, area: Rect) {
        if area.width > 0 && area.height > 0 {
            self.areas.push((control, area));
        }
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        self.areas
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(control, _)| *control)
    }

    pub fn area_of(&self, control: Control) -> Option<Rect> {
        self.areas
            .iter()
            .find(|(c, _)| *c == control)
            .map(|(_, area)| *area)
    }
}
