//! Key mapping and messages for the form loop

use super::state::{Focus, is_select};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use inquiry_application::{SubmitError, SubmitOutcome};
use inquiry_domain::{FormStore, SubmissionState};

/// Result of a spawned submission task, sent back to the select! loop
///
/// The task runs the use case over snapshots of the store and state
/// machine; the loop installs them wholesale on completion. Input is
/// disabled while the task runs, so the snapshots cannot drift.
pub struct SubmissionDone {
    pub outcome: Result<SubmitOutcome, SubmitError>,
    pub store: FormStore,
    pub submission: SubmissionState,
}

/// What a key press means for the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    CycleForward,
    CycleBack,
    Submit,
}

/// Map a terminal key event to a form action, given the current focus
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global chords first
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyAction::Quit),
            KeyCode::Char('s') => Some(KeyAction::Submit),
            _ => None,
        };
    }

    let on_select = matches!(focus, Focus::Field(f) if is_select(f));

    match key.code {
        KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Tab | KeyCode::Down => Some(KeyAction::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(KeyAction::FocusPrev),
        KeyCode::Enter if focus == Focus::Submit => Some(KeyAction::Submit),
        KeyCode::Enter => Some(KeyAction::FocusNext),
        KeyCode::Backspace => Some(KeyAction::Backspace),
        KeyCode::Left if on_select => Some(KeyAction::CycleBack),
        KeyCode::Right if on_select => Some(KeyAction::CycleForward),
        KeyCode::Left => Some(KeyAction::CursorLeft),
        KeyCode::Right => Some(KeyAction::CursorRight),
        KeyCode::Home => Some(KeyAction::CursorHome),
        KeyCode::End => Some(KeyAction::CursorEnd),
        KeyCode::Char(' ') if on_select => Some(KeyAction::CycleForward),
        KeyCode::Char(c) => Some(KeyAction::Insert(c)),
        _ => None,
    }
}
