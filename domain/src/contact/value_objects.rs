//! Subject and contact-method value objects
//!
//! Both enums carry their exact lowercase wire spellings (`no-preference`
//! included) through `Display`/`FromStr` and serde, so the strings typed
//! into the form, the strings on the wire, and the typed variants never
//! drift apart.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What the inquiry is about (required field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    General,
    Support,
    Business,
    Other,
}

impl Subject {
    /// All subjects, in the order the form presents them
    pub const ALL: [Subject; 4] = [
        Subject::General,
        Subject::Support,
        Subject::Business,
        Subject::Other,
    ];

    /// Wire spelling of this subject
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::General => "general",
            Subject::Support => "support",
            Subject::Business => "business",
            Subject::Other => "other",
        }
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Subject::General => "General",
            Subject::Support => "Support",
            Subject::Business => "Business",
            Subject::Other => "Other",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Subject::General),
            "support" => Ok(Subject::Support),
            "business" => Ok(Subject::Business),
            "other" => Ok(Subject::Other),
            _ => Err(DomainError::UnknownSubject(s.to_string())),
        }
    }
}

/// How the user prefers to be reached (optional field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactMethod {
    Phone,
    Email,
    NoPreference,
    Other,
}

impl ContactMethod {
    /// All contact methods, in the order the form presents them
    pub const ALL: [ContactMethod; 4] = [
        ContactMethod::Phone,
        ContactMethod::Email,
        ContactMethod::NoPreference,
        ContactMethod::Other,
    ];

    /// Wire spelling of this contact method
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Phone => "phone",
            ContactMethod::Email => "email",
            ContactMethod::NoPreference => "no-preference",
            ContactMethod::Other => "other",
        }
    }

    /// Human-readable label for UI display
    pub fn label(&self) -> &'static str {
        match self {
            ContactMethod::Phone => "Phone",
            ContactMethod::Email => "Email",
            ContactMethod::NoPreference => "No preference",
            ContactMethod::Other => "Other",
        }
    }
}

impl std::fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(ContactMethod::Phone),
            "email" => Ok(ContactMethod::Email),
            "no-preference" => Ok(ContactMethod::NoPreference),
            "other" => Ok(ContactMethod::Other),
            _ => Err(DomainError::UnknownContactMethod(s.to_string())),
        }
    }
}
