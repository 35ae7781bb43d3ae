//! Submit Inquiry use case.
//!
//! Orchestrates the submit lifecycle: validate-all → send → handle
//! response → reset. Validation failures and endpoint rejections are
//! outcomes, not errors; `Err` is reserved for caller mistakes such as
//! submitting while a request is already in flight.

use crate::ports::contact_gateway::ContactGateway;
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use crate::ports::submission_progress::SubmissionProgress;
use inquiry_domain::{DomainError, FieldError, FormStore, SubmissionState, validate_store};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during submission orchestration.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// What a submit attempt came to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint accepted the inquiry; the form has been reset.
    Accepted,
    /// Validation rejected the form; nothing was sent. All fields are now
    /// marked touched so every error is visible.
    Invalid(Vec<FieldError>),
    /// The endpoint rejected the inquiry or transport failed. Field values
    /// are left intact so the user can retry.
    Rejected { message: String },
}

/// Use case for running one submit attempt.
///
/// 1. Move the state machine to `validating`
/// 2. Run every field rule; bail out with all fields touched on failure
/// 3. Send the inquiry through the [`ContactGateway`]
/// 4. On success reset the store; on failure surface the message
pub struct SubmitInquiryUseCase {
    gateway: Arc<dyn ContactGateway>,
    logger: Arc<dyn SubmissionLogger>,
}

impl Clone for SubmitInquiryUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            logger: self.logger.clone(),
        }
    }
}

impl SubmitInquiryUseCase {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoSubmissionLogger),
        }
    }

    /// Create with a submission journal.
    pub fn with_submission_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute one submit attempt over the given form.
    pub async fn execute(
        &self,
        store: &mut FormStore,
        state: &mut SubmissionState,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmitOutcome, SubmitError> {
        state.begin()?;

        let errors = validate_store(store);
        if !errors.is_empty() {
            store.touch_all();
            state.fail_validation()?;
            progress.on_validation_failed(errors.len());
            debug!("Submission blocked by {} validation error(s)", errors.len());

            self.logger.log(SubmissionEvent::new(
                "validation_failed",
                serde_json::json!({
                    "errors": errors
                        .iter()
                        .map(|e| {
                            serde_json::json!({
                                "field": e.field.as_str(),
                                "message": e.message,
                            })
                        })
                        .collect::<Vec<_>>(),
                }),
            ));

            return Ok(SubmitOutcome::Invalid(errors));
        }

        state.pass_validation()?;

        // Cannot fail after clean validation; the `?` guards against the
        // rules and the builder drifting apart.
        let inquiry = store.build_inquiry()?;

        progress.on_submit_started();
        info!("Submitting inquiry ({})", inquiry.subject);

        match self.gateway.submit(&inquiry).await {
            Ok(()) => {
                store.reset();
                state.succeed()?;
                progress.on_submit_succeeded();
                info!("Endpoint accepted the inquiry");

                self.logger.log(SubmissionEvent::new(
                    "submission_accepted",
                    serde_json::json!({
                        "subject": inquiry.subject.as_str(),
                        "email": inquiry.email,
                    }),
                ));

                Ok(SubmitOutcome::Accepted)
            }
            Err(error) => {
                let message = error.user_message();
                state.fail(message.clone())?;
                progress.on_submit_failed(&message);
                warn!("Submission failed: {}", error);

                self.logger.log(SubmissionEvent::new(
                    "submission_rejected",
                    serde_json::json!({
                        "message": message,
                        "error": error.to_string(),
                    }),
                ));

                Ok(SubmitOutcome::Rejected { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::contact_gateway::{GatewayError, GENERIC_FAILURE_MESSAGE};
    use crate::ports::submission_progress::NoSubmissionProgress;
    use async_trait::async_trait;
    use inquiry_domain::{FieldId, Inquiry, SubmissionPhase, Subject};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    struct MockGateway {
        responses: Mutex<VecDeque<Result<(), GatewayError>>>,
        submitted: Mutex<Vec<Inquiry>>,
    }

    impl MockGateway {
        fn new(responses: Vec<Result<(), GatewayError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(VecDeque::from(responses)),
                submitted: Mutex::new(Vec::new()),
            })
        }

        fn submitted(&self) -> Vec<Inquiry> {
            self.submitted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ContactGateway for MockGateway {
        async fn submit(&self, inquiry: &Inquiry) -> Result<(), GatewayError> {
            self.submitted.lock().unwrap().push(inquiry.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(GatewayError::Transport("no more responses".into())))
        }
    }

    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl RecordingLogger {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
            })
        }
    }

    impl SubmissionLogger for RecordingLogger {
        fn log(&self, event: SubmissionEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn valid_store() -> FormStore {
        let mut store = FormStore::new();
        store.set_value(FieldId::Name, "Jo Doe");
        store.set_value(FieldId::Email, "jo@example.com");
        store.set_value(FieldId::Subject, "support");
        store.set_value(FieldId::Inquiry, "My widget arrived broken.");
        store
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_accepted_submission_sends_once_and_resets() {
        let gateway = MockGateway::new(vec![Ok(())]);
        let use_case = SubmitInquiryUseCase::new(gateway.clone());

        let mut store = valid_store();
        store.touch(FieldId::Name);
        let mut state = SubmissionState::new();

        let outcome = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(state.phase(), &SubmissionPhase::Succeeded);

        // Exactly one outbound call, carrying the entity as it stood
        let submitted = gateway.submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].name, "Jo Doe");
        assert_eq!(submitted[0].subject, Subject::Support);

        // Every field reset, touched status cleared
        assert_eq!(store, FormStore::new());
    }

    #[tokio::test]
    async fn test_rejected_submission_keeps_values_and_surfaces_message() {
        let gateway = MockGateway::new(vec![Err(GatewayError::Rejected {
            status: 400,
            message: Some("Invalid data".to_string()),
        })]);
        let use_case = SubmitInquiryUseCase::new(gateway.clone());

        let mut store = valid_store();
        let mut state = SubmissionState::new();

        let outcome = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Invalid data".to_string()
            }
        );
        assert_eq!(state.failure_message(), Some("Invalid data"));
        // The entity is NOT reset
        assert_eq!(store.value(FieldId::Name), "Jo Doe");
        assert_eq!(store.value(FieldId::Inquiry), "My widget arrived broken.");
    }

    #[tokio::test]
    async fn test_transport_fault_surfaces_generic_message() {
        let gateway = MockGateway::new(vec![Err(GatewayError::Transport(
            "connection refused".to_string(),
        ))]);
        let use_case = SubmitInquiryUseCase::new(gateway);

        let mut store = valid_store();
        let mut state = SubmissionState::new();

        let outcome = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing_and_touches_all() {
        let gateway = MockGateway::new(vec![Ok(())]);
        let use_case = SubmitInquiryUseCase::new(gateway.clone());

        let mut store = FormStore::new();
        store.set_value(FieldId::Name, "Jo");
        let mut state = SubmissionState::new();

        let outcome = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("Expected Invalid outcome");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![FieldId::Email, FieldId::Subject, FieldId::Inquiry]
        );

        // No outbound call, all errors visible, back to idle for a retry
        assert!(gateway.submitted().is_empty());
        for field in FieldId::ALL {
            assert!(store.is_touched(field));
        }
        assert_eq!(state.phase(), &SubmissionPhase::Idle);
        // The typed value survives
        assert_eq!(store.value(FieldId::Name), "Jo");
    }

    #[tokio::test]
    async fn test_double_submit_is_refused() {
        let gateway = MockGateway::new(vec![Ok(())]);
        let use_case = SubmitInquiryUseCase::new(gateway.clone());

        let mut store = valid_store();
        let mut state = SubmissionState::new();
        state.begin().unwrap();
        state.pass_validation().unwrap();

        let result = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Domain(DomainError::SubmissionInFlight))
        ));
        assert!(gateway.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_retry_after_failure_succeeds() {
        let gateway = MockGateway::new(vec![
            Err(GatewayError::Transport("timeout".to_string())),
            Ok(()),
        ]);
        let use_case = SubmitInquiryUseCase::new(gateway.clone());

        let mut store = valid_store();
        let mut state = SubmissionState::new();

        let first = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();
        assert!(matches!(first, SubmitOutcome::Rejected { .. }));

        let second = use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();
        assert_eq!(second, SubmitOutcome::Accepted);
        assert_eq!(gateway.submitted().len(), 2);
    }

    #[tokio::test]
    async fn test_journal_records_each_outcome() {
        let logger = RecordingLogger::new();
        let gateway = MockGateway::new(vec![
            Err(GatewayError::Rejected {
                status: 500,
                message: None,
            }),
            Ok(()),
        ]);
        let use_case =
            SubmitInquiryUseCase::new(gateway).with_submission_logger(logger.clone());

        let mut empty = FormStore::new();
        let mut state = SubmissionState::new();
        use_case
            .execute(&mut empty, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        let mut store = valid_store();
        use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();
        use_case
            .execute(&mut store, &mut state, &NoSubmissionProgress)
            .await
            .unwrap();

        assert_eq!(
            *logger.events.lock().unwrap(),
            vec![
                "validation_failed",
                "submission_rejected",
                "submission_accepted"
            ]
        );
    }
}
