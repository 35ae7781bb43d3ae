//! The submission state machine
//!
//! A linear flow with one branch point:
//!
//! ```text
//! idle ──begin──> validating ──pass──> submitting ──succeed──> succeeded
//!                     │                    │
//!                    fail                 fail
//!                     v                    v
//!                    idle                failed
//! ```
//!
//! `succeeded`/`failed` return to `idle` on the next user interaction
//! ([`SubmissionState::acknowledge`]). At most one submission is in flight:
//! `begin` while `submitting` is refused with
//! [`DomainError::SubmissionInFlight`].

use crate::core::error::DomainError;

/// Where the submission lifecycle currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed {
        message: String,
    },
}

impl SubmissionPhase {
    /// Short name used in transition errors and status displays
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Validating => "validating",
            SubmissionPhase::Submitting => "submitting",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::Failed { .. } => "failed",
        }
    }
}

/// Guards the submission lifecycle transitions
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    phase: SubmissionPhase,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Whether a network request is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(self.phase, SubmissionPhase::Submitting)
    }

    /// The surfaced failure message, if the last submission failed
    pub fn failure_message(&self) -> Option<&str> {
        match &self.phase {
            SubmissionPhase::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// A submit request arrived: move to `validating`
    ///
    /// A terminal phase (`succeeded`/`failed`) counts as user interaction
    /// and is acknowledged implicitly.
    pub fn begin(&mut self) -> Result<(), DomainError> {
        match self.phase {
            SubmissionPhase::Idle
            | SubmissionPhase::Succeeded
            | SubmissionPhase::Failed { .. } => {
                self.phase = SubmissionPhase::Validating;
                Ok(())
            }
            SubmissionPhase::Submitting => Err(DomainError::SubmissionInFlight),
            SubmissionPhase::Validating => Err(self.invalid("begin")),
        }
    }

    /// All fields passed: move to `submitting`
    pub fn pass_validation(&mut self) -> Result<(), DomainError> {
        match self.phase {
            SubmissionPhase::Validating => {
                self.phase = SubmissionPhase::Submitting;
                Ok(())
            }
            _ => Err(self.invalid("pass_validation")),
        }
    }

    /// At least one field failed: back to `idle` with errors shown
    pub fn fail_validation(&mut self) -> Result<(), DomainError> {
        match self.phase {
            SubmissionPhase::Validating => {
                self.phase = SubmissionPhase::Idle;
                Ok(())
            }
            _ => Err(self.invalid("fail_validation")),
        }
    }

    /// The endpoint accepted the inquiry
    pub fn succeed(&mut self) -> Result<(), DomainError> {
        match self.phase {
            SubmissionPhase::Submitting => {
                self.phase = SubmissionPhase::Succeeded;
                Ok(())
            }
            _ => Err(self.invalid("succeed")),
        }
    }

    /// The endpoint rejected the inquiry, or transport failed
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), DomainError> {
        match self.phase {
            SubmissionPhase::Submitting => {
                self.phase = SubmissionPhase::Failed {
                    message: message.into(),
                };
                Ok(())
            }
            _ => Err(self.invalid("fail")),
        }
    }

    /// The user interacted after a terminal phase: back to `idle`
    ///
    /// A no-op in every other phase.
    pub fn acknowledge(&mut self) {
        if matches!(
            self.phase,
            SubmissionPhase::Succeeded | SubmissionPhase::Failed { .. }
        ) {
            self.phase = SubmissionPhase::Idle;
        }
    }

    fn invalid(&self, transition: &str) -> DomainError {
        DomainError::InvalidTransition(format!(
            "{} while {}",
            transition,
            self.phase.name()
        ))
    }
}
