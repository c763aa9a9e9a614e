//! # Field Validation
//!
//! Pure per-field rules. A failed check is an ordinary value, never an error.

use crate::form::{FormField, InputKind};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const URL_MESSAGE: &str = "Enter a valid URL.";
pub const EMAIL_MESSAGE: &str = "Enter a valid email address.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Empty when valid
    pub message: String,
}

impl Validation {
    pub fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    pub fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern compiles"))
}

/// Absolute URL with a scheme
pub fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok()
}

pub fn is_email(value: &str) -> bool {
    email_pattern().is_match(value)
}

/// Evaluate the rules for one field; the first failing rule wins
pub fn validate_value(kind: InputKind, required: bool, value: &str) -> Validation {
    let trimmed = value.trim();

    if required && trimmed.is_empty() {
        return Validation::invalid(REQUIRED_MESSAGE);
    }
    if trimmed.is_empty() {
        return Validation::ok();
    }

    match kind {
        InputKind::Url if !is_absolute_url(value) => Validation::invalid(URL_MESSAGE),
        InputKind::Email if !is_email(value) => Validation::invalid(EMAIL_MESSAGE),
        _ => Validation::ok(),
    }
}

pub fn validate_field(field: &FormField) -> Validation {
    validate_value(field.spec.kind, field.spec.required, &field.value)
}
