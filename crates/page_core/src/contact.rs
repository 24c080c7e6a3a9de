//! Contact form state machine: Idle -> Submitting -> Idle | Failed.

use shared::{
    domain::{ContactFields, FormField},
    protocol::ContactReceipt,
};
use tracing::{debug, info, warn};

use crate::submitter::{ContactSubmitter, SubmitError};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SUBMITTING_LABEL: &str = "Sending…";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmissionTicket(u64);

impl SubmissionTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting { ticket: SubmissionTicket },
    Failed { error: SubmitError },
}

/// A started submission, detached from the controller so the controller stays
/// usable while it runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub fields: ContactFields,
}

impl PendingSubmission {
    pub async fn run(self, submitter: &dyn ContactSubmitter) -> SubmissionResult {
        let outcome = submitter.submit(&self.fields).await;
        SubmissionResult {
            ticket: self.ticket,
            outcome,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub ticket: SubmissionTicket,
    pub outcome: Result<ContactReceipt, SubmitError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButtonProps {
    pub label: &'static str,
    pub disabled: bool,
}

#[derive(Debug, Clone)]
pub struct ContactFormController {
    fields: ContactFields,
    phase: FormPhase,
    issued_tickets: u64,
}

impl Default for ContactFormController {
    fn default() -> Self {
        Self {
            fields: ContactFields::default(),
            phase: FormPhase::Idle,
            issued_tickets: 0,
        }
    }
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn last_error(&self) -> Option<&SubmitError> {
        match &self.phase {
            FormPhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// A failed submission keeps its fields, so submitting again is a retry.
    pub fn can_retry(&self) -> bool {
        matches!(self.phase, FormPhase::Failed { .. })
    }

    /// Edits are accepted in every phase. Editing after a failure dismisses it.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.fields.set(field, value);
        if let FormPhase::Failed { .. } = self.phase {
            self.phase = FormPhase::Idle;
        }
    }

    /// Starts a submission of the current fields. Returns `None` while another
    /// submission is still in flight.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        if let FormPhase::Submitting { ticket } = self.phase {
            debug!(in_flight = ticket.value(), "submit suppressed while in flight");
            return None;
        }
        self.issued_tickets += 1;
        let ticket = SubmissionTicket(self.issued_tickets);
        let retry = self.can_retry();
        self.phase = FormPhase::Submitting { ticket };
        info!(ticket = ticket.value(), retry, "contact submission started");
        Some(PendingSubmission {
            ticket,
            fields: self.fields.clone(),
        })
    }

    /// Applies a finished submission. Results for anything but the in-flight
    /// ticket are dropped and `false` is returned.
    pub fn complete(&mut self, result: SubmissionResult) -> bool {
        match self.phase {
            FormPhase::Submitting { ticket } if ticket == result.ticket => {}
            _ => {
                warn!(ticket = result.ticket.value(), "ignoring stale submission result");
                return false;
            }
        }
        match result.outcome {
            Ok(receipt) => {
                info!(
                    ticket = result.ticket.value(),
                    request_id = %receipt.request_id,
                    "contact submission completed"
                );
                self.fields.clear();
                self.phase = FormPhase::Idle;
            }
            Err(error) => {
                warn!(ticket = result.ticket.value(), %error, "contact submission failed");
                self.phase = FormPhase::Failed { error };
            }
        }
        true
    }

    pub fn submit_button(&self) -> SubmitButtonProps {
        let submitting = self.is_submitting();
        SubmitButtonProps {
            label: if submitting {
                SUBMITTING_LABEL
            } else {
                SUBMIT_LABEL
            },
            disabled: submitting,
        }
    }
}

#[cfg(test)]
#[path = "tests/contact_tests.rs"]
mod tests;
