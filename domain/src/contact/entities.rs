//! The Inquiry entity
//!
//! Serializes with the wire field names the collaborator endpoint expects:
//! all six fields are always present, with optional fields carried as empty
//! strings when the user left them blank.

use super::value_objects::{ContactMethod, Subject};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A user-submitted contact record
///
/// Built from a validated [`FormStore`](crate::form::store::FormStore)
/// snapshot; construction does not re-run field validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Subject,
    pub inquiry: String,
    #[serde(
        rename = "contactMethod",
        serialize_with = "serialize_method",
        deserialize_with = "deserialize_method"
    )]
    pub contact_method: Option<ContactMethod>,
}

// An absent contact method goes on the wire as "", matching what the form
// sends for an untouched select.
fn serialize_method<S>(value: &Option<ContactMethod>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(method) => serializer.serialize_str(method.as_str()),
        None => serializer.serialize_str(""),
    }
}

fn deserialize_method<'de, D>(deserializer: D) -> Result<Option<ContactMethod>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        Ok(None)
    } else {
        ContactMethod::from_str(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}
