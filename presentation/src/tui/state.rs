//! Terminal form state
//!
//! Single source of truth for everything the form renders. Key handling
//! mutates this state; the widgets read it.

use inquiry_domain::{
    ContactMethod, FieldError, FieldId, FormStore, Subject, SubmissionState, validate,
};
use std::time::Instant;

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldId),
    Submit,
}

impl Focus {
    /// Focus order: the six fields in form order, then the submit action
    pub const ORDER: [Focus; 7] = [
        Focus::Field(FieldId::Name),
        Focus::Field(FieldId::Email),
        Focus::Field(FieldId::Phone),
        Focus::Field(FieldId::Subject),
        Focus::Field(FieldId::Inquiry),
        Focus::Field(FieldId::ContactMethod),
        Focus::Submit,
    ];

    pub fn next(self) -> Focus {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Whether a field is an option selector rather than free text
pub fn is_select(field: FieldId) -> bool {
    matches!(field, FieldId::Subject | FieldId::ContactMethod)
}

/// Central form state — owned by the [`FormApp`](super::app::FormApp) loop
pub struct FormUiState {
    // -- Domain --
    pub store: FormStore,
    pub submission: SubmissionState,

    // -- Focus and per-field editing --
    pub focus: Focus,
    cursors: [usize; FieldId::COUNT],
    errors: [Option<String>; FieldId::COUNT],

    // -- Overlay --
    pub banner: Option<(String, Instant)>,

    // -- Lifecycle --
    /// A spawned submission task is outstanding; input is disabled.
    pub pending: bool,
    pub should_quit: bool,
}

impl Default for FormUiState {
    fn default() -> Self {
        Self {
            store: FormStore::new(),
            submission: SubmissionState::new(),
            focus: Focus::Field(FieldId::Name),
            cursors: [0; FieldId::COUNT],
            errors: Default::default(),
            banner: None,
            pending: false,
            should_quit: false,
        }
    }
}

impl FormUiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused field, if focus is not on the submit action
    pub fn focused_field(&self) -> Option<FieldId> {
        match self.focus {
            Focus::Field(field) => Some(field),
            Focus::Submit => None,
        }
    }

    /// The error to show for a field: only once the field is touched
    pub fn visible_error(&self, field: FieldId) -> Option<&str> {
        if self.store.is_touched(field) {
            self.errors[field as usize].as_deref()
        } else {
            None
        }
    }

    /// Byte cursor position within the focused field's value
    pub fn cursor(&self, field: FieldId) -> usize {
        self.cursors[field as usize]
    }

    // -- Focus movement --

    pub fn focus_next(&mut self) {
        self.blur_current();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.blur_current();
        self.focus = self.focus.prev();
    }

    /// Leaving a field marks it touched and refreshes its error
    fn blur_current(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.store.touch(field);
            self.revalidate(field);
        }
    }

    // -- Text editing (no-ops on select fields and the submit action) --

    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let cursor = self.cursors[field as usize];
        let mut value = self.store.value(field).to_string();
        value.insert(cursor, c);
        self.store.set_value(field, value);
        self.cursors[field as usize] = cursor + c.len_utf8();
        self.revalidate_if_touched(field);
    }

    pub fn delete_char(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let cursor = self.cursors[field as usize];
        if cursor == 0 {
            return;
        }
        let mut value = self.store.value(field).to_string();
        let prev_char_len = value[..cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        value.remove(cursor - prev_char_len);
        self.store.set_value(field, value);
        self.cursors[field as usize] = cursor - prev_char_len;
        self.revalidate_if_touched(field);
    }

    pub fn cursor_left(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let cursor = self.cursors[field as usize];
        if cursor > 0 {
            let prev_char_len = self.store.value(field)[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursors[field as usize] = cursor - prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let Some(field) = self.focused_text_field() else {
            return;
        };
        let cursor = self.cursors[field as usize];
        let value = self.store.value(field);
        if cursor < value.len() {
            let next_char_len = value[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursors[field as usize] = cursor + next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        if let Some(field) = self.focused_text_field() {
            self.cursors[field as usize] = 0;
        }
    }

    pub fn cursor_end(&mut self) {
        if let Some(field) = self.focused_text_field() {
            self.cursors[field as usize] = self.store.value(field).len();
        }
    }

    // -- Option cycling (select fields only) --

    pub fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let options: Vec<&'static str> = match field {
            FieldId::Subject => Subject::ALL.iter().map(|s| s.as_str()).collect(),
            // The empty option keeps the optional field clearable
            FieldId::ContactMethod => std::iter::once("")
                .chain(ContactMethod::ALL.iter().map(|m| m.as_str()))
                .collect(),
            _ => return,
        };

        let current = self.store.value(field);
        let pos = options.iter().position(|o| *o == current);
        let next = match (pos, forward) {
            (Some(p), true) => (p + 1) % options.len(),
            (Some(p), false) => (p + options.len() - 1) % options.len(),
            (None, true) => 0,
            (None, false) => options.len() - 1,
        };
        self.store.set_value(field, options[next]);
        self.revalidate_if_touched(field);
    }

    // -- Validation bookkeeping --

    fn revalidate(&mut self, field: FieldId) {
        self.errors[field as usize] = validate(field, self.store.value(field));
    }

    fn revalidate_if_touched(&mut self, field: FieldId) {
        if self.store.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// Install the errors from a failed submit attempt (all fields are
    /// already touched by the use case)
    pub fn show_errors(&mut self, errors: &[FieldError]) {
        self.errors = Default::default();
        for error in errors {
            self.errors[error.field as usize] = Some(error.message.clone());
        }
    }

    /// Clear per-field errors and cursors after a successful submission
    pub fn clear_after_success(&mut self) {
        self.errors = Default::default();
        self.cursors = [0; FieldId::COUNT];
        self.focus = Focus::Field(FieldId::Name);
    }

    fn focused_text_field(&self) -> Option<FieldId> {
        self.focused_field().filter(|f| !is_select(*f))
    }
}
