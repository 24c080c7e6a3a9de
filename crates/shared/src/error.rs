use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FormField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    RateLimited,
    Unavailable,
    Internal,
}

/// Error envelope returned by a contact endpoint alongside a non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Missing(FormField),
    #[error("'{0}' is not a valid email address")]
    MalformedEmail(String),
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}

impl FieldError {
    pub fn field(&self) -> Option<FormField> {
        match self {
            FieldError::Missing(field) => Some(*field),
            FieldError::MalformedEmail(_) => Some(FormField::Email),
            FieldError::UnknownField(_) => None,
        }
    }
}
