//! Input field buffer.

use flipform_core::{FieldSpec, InputKind};

/// Mask glyph for password characters.
const MASK: char = '•';

/// Text held by one mounted input control.
///
/// Accepts any text; nothing is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBuffer {
    spec: FieldSpec,
    value: String,
}

impl FieldBuffer {
    pub fn new(spec: FieldSpec) -> Self {
        Self {
            spec,
            value: String::new(),
        }
    }

    pub fn spec(&self) -> &FieldSpec {
        &self.spec
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.value.push(ch);
        }
    }

    /// Appends pasted text. Line breaks collapse to spaces (single-line input).
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\r' => {}
                '\n' | '\t' => self.value.push(' '),
                ch => self.insert_char(ch),
            }
        }
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    /// Text as shown on screen; password input is masked.
    pub fn display_text(&self) -> String {
        match self.spec.kind {
            InputKind::Password => MASK.to_string().repeat(self.value.chars().count()),
            InputKind::Text | InputKind::Email => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use flipform_core::form::{EMAIL_FIELD, PASSWORD_FIELD, USERNAME_FIELD};

    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut field = FieldBuffer::new(USERNAME_FIELD);
        for ch in "bob".chars() {
            field.insert_char(ch);
        }
        field.backspace();
        assert_eq!(field.value(), "bo");
        assert_eq!(field.display_text(), "bo");
    }

    #[test]
    fn test_password_is_masked() {
        let mut field = FieldBuffer::new(PASSWORD_FIELD);
        field.insert_str("hunter2");
        assert_eq!(field.value(), "hunter2");
        assert_eq!(field.display_text(), "•••••••");
    }

    #[test]
    fn test_anything_goes_into_email() {
        let mut field = FieldBuffer::new(EMAIL_FIELD);
        field.insert_str("not an email\r\nat all");
        assert_eq!(field.value(), "not an email at all");
    }

    #[test]
    fn test_control_chars_are_dropped() {
        let mut field = FieldBuffer::new(USERNAME_FIELD);
        field.insert_char('\u{7}');
        assert!(field.is_empty());
        field.backspace();
        assert!(field.is_empty());
    }
}
