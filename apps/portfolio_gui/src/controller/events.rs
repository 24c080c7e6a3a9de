//! Backend-to-UI events and error modeling for the portfolio window.

use page_core::{SubmissionResult, SubmitError, SubmitRejected};

pub enum UiEvent {
    Info(String),
    Error(UiError),
    SubmissionFinished(SubmissionResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    SubmitContact,
    General,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
            || message_lower.contains("required")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("unreachable")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("unavailable")
            || message_lower.contains("disconnect")
            || message_lower.contains("queue is full")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    /// Structured errors are classified by variant rather than by wording.
    pub fn from_submit_error(error: &SubmitError) -> Self {
        let category = match error {
            SubmitError::Transport(_) => UiErrorCategory::Transport,
            SubmitError::InvalidEndpoint { .. } => UiErrorCategory::Validation,
            SubmitError::Rejected { .. } if error.is_retryable() => UiErrorCategory::Transport,
            SubmitError::Rejected { .. } => UiErrorCategory::Validation,
            SubmitError::InvalidResponse(_) => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context: UiErrorContext::SubmitContact,
            message: error.to_string(),
        }
    }

    /// `None` for an in-flight rejection: the press is simply dropped.
    pub fn from_rejection(rejection: &SubmitRejected) -> Option<Self> {
        match rejection {
            SubmitRejected::InFlight => None,
            SubmitRejected::Invalid(field_error) => Some(Self {
                category: UiErrorCategory::Validation,
                context: UiErrorContext::SubmitContact,
                message: field_error.to_string(),
            }),
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line text for the status banner.
    pub fn banner_text(&self) -> String {
        match (self.context, self.category) {
            (UiErrorContext::BackendStartup, _) => format!(
                "Contact worker failed to start; messages cannot be sent. ({})",
                self.message
            ),
            (UiErrorContext::SubmitContact, UiErrorCategory::Transport) => format!(
                "Message not sent: {}. Your text is kept, press Send Message to retry.",
                self.message
            ),
            (UiErrorContext::SubmitContact, UiErrorCategory::Validation) => {
                format!("Please check the form: {}", self.message)
            }
            _ => self.message.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
