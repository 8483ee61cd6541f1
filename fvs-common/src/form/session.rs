//! Submission state machine
//!
//! `Idle -> Submitting -> {Succeeded, Failed}`. Both terminal phases accept a
//! new attempt. A submission starts only when [`FormState::validate`] passes,
//! and attempts made while one is outstanding are ignored.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::{FormState, SubmissionPayload, INCOMPLETE_FORM_MESSAGE};
use crate::api::types::SubmitAck;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Why a submission did not reach a successful acknowledgement
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced an HTTP response
    #[error("Network error: {0}")]
    Network(String),

    /// The gateway answered with a non-success status
    #[error("Rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// Success status but the body was not an acknowledgement
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Delivers a payload to the submission gateway
#[async_trait]
pub trait SubmitTransport: Send + Sync {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitAck, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

/// Feedback banner shown under the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub message: String,
}

impl SubmitStatus {
    fn success(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Success, message: message.into() }
    }

    fn error(message: impl Into<String>) -> Self {
        Self { kind: StatusKind::Error, message: message.into() }
    }
}

/// One browsing session: the form plus the state of its submission attempt
#[derive(Debug, Clone)]
pub struct SurveySession {
    form: FormState,
    phase: SubmitPhase,
    status: Option<SubmitStatus>,
    last_submission_id: Option<String>,
}

impl SurveySession {
    pub fn new(question_count: usize) -> Self {
        Self {
            form: FormState::new(question_count),
            phase: SubmitPhase::Idle,
            status: None,
            last_submission_id: None,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Mutable access for user edits
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn status(&self) -> Option<&SubmitStatus> {
        self.status.as_ref()
    }

    /// Identifier returned by the gateway for the last successful submission
    pub fn last_submission_id(&self) -> Option<&str> {
        self.last_submission_id.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Try to enter `Submitting`
    ///
    /// Returns the payload to send, or `None` when an attempt is already
    /// outstanding or the form is incomplete. Validation failures leave the
    /// form untouched and set an error status.
    pub fn begin_submit(&mut self) -> Option<SubmissionPayload> {
        if self.is_submitting() {
            debug!("Submit ignored: a submission is already in progress");
            return None;
        }

        if !self.form.validate() {
            self.status = Some(SubmitStatus::error(INCOMPLETE_FORM_MESSAGE));
            return None;
        }

        self.phase = SubmitPhase::Submitting;
        self.status = None;
        Some(self.form.payload())
    }

    /// Resolve the outstanding attempt with the gateway's answer
    pub fn finish_submit(&mut self, result: Result<SubmitAck, TransportError>) {
        if !self.is_submitting() {
            warn!("Submission result received with no submission in progress; ignoring");
            return;
        }

        match result {
            Ok(ack) => {
                info!("Submission stored with id {}", ack.id);
                self.form.reset();
                self.last_submission_id = Some(ack.id);
                self.phase = SubmitPhase::Succeeded;
                self.status = Some(SubmitStatus::success(SUCCESS_MESSAGE));
            }
            Err(e) => {
                warn!("Submission failed: {}", e);
                let message = match e {
                    TransportError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
                    TransportError::Rejected { message, .. } => {
                        message.unwrap_or_else(|| SUBMISSION_FAILED_MESSAGE.to_string())
                    }
                    TransportError::InvalidResponse(_) => SUBMISSION_FAILED_MESSAGE.to_string(),
                };
                self.phase = SubmitPhase::Failed;
                self.status = Some(SubmitStatus::error(message));
            }
        }
    }

    /// Full round trip: validate, send, resolve
    pub async fn submit<T>(&mut self, transport: &T) -> SubmitPhase
    where
        T: SubmitTransport + ?Sized,
    {
        let Some(payload) = self.begin_submit() else {
            return self.phase;
        };

        let result = transport.submit(&payload).await;
        self.finish_submit(result);
        self.phase
    }
}
