//! Field validation shared by the booking and contact forms.
//!
//! All rules are pure functions of the current value; they never touch
//! the network and are re-evaluated from scratch on every pass.

use std::borrow::Cow;
use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// Field name -> user-facing message, in deterministic order.
pub type FieldErrors = BTreeMap<String, String>;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[0-9]{10,15}$").unwrap());

/// Strip spaces and hyphens before matching the phone pattern.
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

pub fn is_valid_name(value: &str) -> bool {
    value.trim().chars().count() >= 2
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(&normalize_phone(value))
}

pub fn is_valid_message(value: &str) -> bool {
    value.trim().chars().count() >= 10
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub(crate) fn validate_name(value: &str) -> Result<(), ValidationError> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(field_error("name", "Name must be at least 2 characters"))
    }
}

pub(crate) fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(field_error("email", "Please enter a valid email address"))
    }
}

pub(crate) fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(field_error(
            "phone",
            "Please enter a valid phone number (10-15 digits)",
        ))
    }
}

pub(crate) fn validate_message(value: &str) -> Result<(), ValidationError> {
    if is_valid_message(value) {
        Ok(())
    } else {
        Err(field_error(
            "message",
            "Message must be at least 10 characters",
        ))
    }
}

/// Flatten derive-produced errors into the field-keyed map, keeping the
/// first message per field.
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut map = FieldErrors::new();
    for (field, field_errors) in errors.field_errors() {
        if let Some(first) = field_errors.first() {
            let message = first
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            map.insert(field.to_string(), message);
        }
    }
    map
}
