//! The field store — current values and touched status for all six fields

use super::field::FieldId;
use super::validation::validate_store;
use crate::contact::entities::Inquiry;
use crate::contact::value_objects::{ContactMethod, Subject};
use crate::core::error::DomainError;
use std::str::FromStr;

/// Holds the current value and touched status of every form field
///
/// The store is plain data: it never runs validation on its own. Callers
/// decide when to validate (on blur, on submit) via
/// [`validate`](super::validation::validate) and friends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStore {
    values: [String; FieldId::COUNT],
    touched: [bool; FieldId::COUNT],
}

impl FormStore {
    /// Create an empty store with no fields touched
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field
    pub fn value(&self, field: FieldId) -> &str {
        &self.values[field.index()]
    }

    /// Replace a field's value
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Mark a field as touched (it received and lost focus at least once)
    pub fn touch(&mut self, field: FieldId) {
        self.touched[field.index()] = true;
    }

    /// Mark every field as touched so every error becomes visible at
    /// once; used when a submit attempt fails validation
    pub fn touch_all(&mut self) {
        self.touched = [true; FieldId::COUNT];
    }

    /// Whether a field has been touched
    pub fn is_touched(&self, field: FieldId) -> bool {
        self.touched[field.index()]
    }

    /// Reset every field to empty and clear all touched status
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Build the [`Inquiry`] entity from the current values
    ///
    /// Callers are expected to have validated the store first; a value that
    /// does not parse surfaces as [`DomainError::NotEligible`].
    pub fn build_inquiry(&self) -> Result<Inquiry, DomainError> {
        let errors = validate_store(self);
        if let Some(first) = errors.first() {
            return Err(DomainError::NotEligible(format!(
                "{}: {}",
                first.field, first.message
            )));
        }

        let subject = Subject::from_str(self.value(FieldId::Subject).trim())?;
        let method_raw = self.value(FieldId::ContactMethod).trim();
        let contact_method = if method_raw.is_empty() {
            None
        } else {
            Some(ContactMethod::from_str(method_raw)?)
        };

        Ok(Inquiry {
            name: self.value(FieldId::Name).trim().to_string(),
            email: self.value(FieldId::Email).trim().to_string(),
            phone: self.value(FieldId::Phone).trim().to_string(),
            subject,
            inquiry: self.value(FieldId::Inquiry).trim().to_string(),
            contact_method,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_store() -> FormStore {
        let mut store = FormStore::new();
        store.set_value(FieldId::Name, "Jo Doe");
        store.set_value(FieldId::Email, "jo@example.com");
        store.set_value(FieldId::Subject, "support");
        store.set_value(FieldId::Inquiry, "My widget arrived broken.");
        store
    }

    #[test]
    fn test_new_store_is_empty_and_untouched() {
        let store = FormStore::new();
        for field in FieldId::ALL {
            assert_eq!(store.value(field), "");
            assert!(!store.is_touched(field));
        }
    }

    #[test]
    fn test_set_value_and_touch_are_per_field() {
        let mut store = FormStore::new();
        store.set_value(FieldId::Email, "jo@example.com");
        store.touch(FieldId::Email);

        assert_eq!(store.value(FieldId::Email), "jo@example.com");
        assert!(store.is_touched(FieldId::Email));
        assert_eq!(store.value(FieldId::Name), "");
        assert!(!store.is_touched(FieldId::Name));
    }

    #[test]
    fn test_touch_all() {
        let mut store = FormStore::new();
        store.touch_all();
        for field in FieldId::ALL {
            assert!(store.is_touched(field));
        }
    }

    #[test]
    fn test_reset_clears_values_and_touched() {
        let mut store = filled_store();
        store.touch_all();
        store.reset();
        assert_eq!(store, FormStore::new());
    }

    #[test]
    fn test_build_inquiry_from_valid_store() {
        let inquiry = filled_store().build_inquiry().unwrap();
        assert_eq!(inquiry.name, "Jo Doe");
        assert_eq!(inquiry.subject, Subject::Support);
        assert_eq!(inquiry.phone, "");
        assert_eq!(inquiry.contact_method, None);
    }

    #[test]
    fn test_build_inquiry_trims_values() {
        let mut store = filled_store();
        store.set_value(FieldId::Name, "  Jo Doe  ");
        let inquiry = store.build_inquiry().unwrap();
        assert_eq!(inquiry.name, "Jo Doe");
    }

    #[test]
    fn test_build_inquiry_carries_optionals() {
        let mut store = filled_store();
        store.set_value(FieldId::Phone, "+1 (555) 123-4567");
        store.set_value(FieldId::ContactMethod, "no-preference");
        let inquiry = store.build_inquiry().unwrap();
        assert_eq!(inquiry.phone, "+1 (555) 123-4567");
        assert_eq!(inquiry.contact_method, Some(ContactMethod::NoPreference));
    }

    #[test]
    fn test_build_inquiry_refuses_invalid_store() {
        let mut store = filled_store();
        store.set_value(FieldId::Email, "not-an-email");
        let err = store.build_inquiry().unwrap_err();
        assert!(matches!(err, DomainError::NotEligible(_)));
    }
}
