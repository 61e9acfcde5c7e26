//! Form mode model.
//!
//! The card shows exactly one of two modes. Everything the card renders
//! (title, fields, login-only extras, toggle prompt) is derived from the mode.

use serde::{Deserialize, Serialize};

/// The active variant of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

impl FormMode {
    /// Returns the other mode. Total on both variants.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::Register,
            FormMode::Register => FormMode::Login,
        }
    }

    /// Card title; also the submit button label.
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Login => "Login",
            FormMode::Register => "Register",
        }
    }

    /// Prompt shown before the toggle link.
    pub fn toggle_prompt(self) -> &'static str {
        match self {
            FormMode::Login => "Don't have an account?",
            FormMode::Register => "Already have an account?",
        }
    }

    /// Label of the toggle link (the mode it switches to).
    pub fn toggle_label(self) -> &'static str {
        self.toggled().title()
    }

    /// Whether the Remember-me checkbox and Forgot-password button are shown.
    pub fn shows_login_extras(self) -> bool {
        matches!(self, FormMode::Login)
    }

    /// Fields rendered for this mode, in visual order.
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            FormMode::Login => &LOGIN_FIELDS,
            FormMode::Register => &REGISTER_FIELDS,
        }
    }
}

impl std::fmt::Display for FormMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for FormMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "login" => Ok(FormMode::Login),
            "register" => Ok(FormMode::Register),
            other => Err(format!("unknown form mode '{other}' (expected login or register)")),
        }
    }
}

/// Leading icon of an input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    User,
    Lock,
    Mail,
}

/// Kind of value an input field holds. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
}

/// Description of one input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub icon: Icon,
    pub placeholder: &'static str,
    pub kind: InputKind,
}

impl FieldSpec {
    /// A plain text field.
    pub const fn new(icon: Icon, placeholder: &'static str) -> Self {
        Self {
            icon,
            placeholder,
            kind: InputKind::Text,
        }
    }

    #[must_use]
    pub const fn with_kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }
}

pub const USERNAME_FIELD: FieldSpec = FieldSpec::new(Icon::User, "Username");
pub const EMAIL_FIELD: FieldSpec = FieldSpec::new(Icon::Mail, "Email").with_kind(InputKind::Email);
pub const PASSWORD_FIELD: FieldSpec =
    FieldSpec::new(Icon::Lock, "Password").with_kind(InputKind::Password);

const LOGIN_FIELDS: [FieldSpec; 2] = [USERNAME_FIELD, PASSWORD_FIELD];
const REGISTER_FIELDS: [FieldSpec; 3] = [USERNAME_FIELD, EMAIL_FIELD, PASSWORD_FIELD];
