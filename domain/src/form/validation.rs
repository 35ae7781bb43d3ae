//! Per-field validation rules
//!
//! Every rule is a pure function over the field's current string value:
//! stateless, deterministic, no side effects. Values are trimmed before
//! rule evaluation. Unknown field identifiers validate as "no error";
//! see [`validate_named`].

use super::field::FieldId;
use super::store::FormStore;
use crate::contact::value_objects::{ContactMethod, Subject};
use std::str::FromStr;

/// Minimum length of the name field, in characters
const MIN_NAME_CHARS: usize = 2;

/// Minimum length of the inquiry text, in characters
const MIN_INQUIRY_CHARS: usize = 10;

/// A validation error attached to a specific field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FieldId,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a single field value, returning an error message if invalid
pub fn validate(field: FieldId, value: &str) -> Option<String> {
    let value = value.trim();
    match field {
        FieldId::Name => validate_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Phone => validate_phone(value),
        FieldId::Subject => validate_subject(value),
        FieldId::Inquiry => validate_inquiry(value),
        FieldId::ContactMethod => validate_contact_method(value),
    }
}

/// Validate a field addressed by its wire identifier
///
/// Unrecognized identifiers return `None` (no error), matching the
/// permissive behavior of the original form.
pub fn validate_named(identifier: &str, value: &str) -> Option<String> {
    FieldId::parse(identifier).and_then(|field| validate(field, value))
}

/// Validate every field of a store, in form order
pub fn validate_store(store: &FormStore) -> Vec<FieldError> {
    FieldId::ALL
        .iter()
        .filter_map(|&field| {
            validate(field, store.value(field)).map(|message| FieldError::new(field, message))
        })
        .collect()
}

fn validate_name(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Name is required".to_string());
    }
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Some("Name can only contain letters and spaces".to_string());
    }
    if value.chars().count() < MIN_NAME_CHARS {
        return Some(format!("Name must be at least {MIN_NAME_CHARS} characters"));
    }
    None
}

fn validate_email(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Email is required".to_string());
    }
    if !has_email_shape(value) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

// A basic local@domain.tld shape check, not RFC 5322: exactly one '@',
// a non-empty local part, a domain with a dot and non-empty labels, and
// no whitespace anywhere.
fn has_email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

fn validate_phone(value: &str) -> Option<String> {
    if value.is_empty() {
        // Optional field
        return None;
    }
    let allowed =
        |c: char| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')');
    if !value.chars().all(allowed) {
        return Some("Phone can only contain digits, spaces, and + - ( )".to_string());
    }
    None
}

fn validate_subject(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Please select a subject".to_string());
    }
    if Subject::from_str(value).is_err() {
        return Some("Please select a valid subject".to_string());
    }
    None
}

fn validate_inquiry(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Inquiry is required".to_string());
    }
    if value.chars().count() < MIN_INQUIRY_CHARS {
        return Some(format!(
            "Inquiry must be at least {MIN_INQUIRY_CHARS} characters"
        ));
    }
    None
}

fn validate_contact_method(value: &str) -> Option<String> {
    if value.is_empty() {
        // Optional field
        return None;
    }
    if ContactMethod::from_str(value).is_err() {
        return Some("Please select a valid contact method".to_string());
    }
    None
}
