//! Delivery of contact submissions.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ContactFields,
    error::{ApiError, ErrorCode},
    protocol::{ContactReceipt, ContactRequest},
};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

const HTTP_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("invalid contact endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
    #[error("contact endpoint unreachable: {0}")]
    Transport(String),
    #[error("contact endpoint rejected submission ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },
    #[error("invalid response from contact endpoint: {0}")]
    InvalidResponse(String),
}

impl SubmitError {
    /// Whether sending the same fields again could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitError::Transport(_) | SubmitError::InvalidResponse(_) => true,
            SubmitError::Rejected { status, code, .. } => {
                *status >= 500
                    || matches!(code, Some(ErrorCode::RateLimited | ErrorCode::Unavailable))
            }
            SubmitError::InvalidEndpoint { .. } => false,
        }
    }
}

#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, fields: &ContactFields) -> Result<ContactReceipt, SubmitError>;
}

/// Stand-in transport: waits a fixed delay and always accepts.
#[derive(Debug, Clone, Copy)]
pub struct DelayedSubmitter {
    delay: Duration,
}

impl DelayedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for DelayedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl ContactSubmitter for DelayedSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<ContactReceipt, SubmitError> {
        let request = ContactRequest::from_fields(fields);
        tokio::time::sleep(self.delay).await;
        info!(request_id = %request.request_id, "simulated contact submission accepted");
        Ok(ContactReceipt {
            request_id: request.request_id,
            accepted: true,
            note: Some("simulated".to_string()),
        })
    }
}

/// POSTs a [`ContactRequest`] as JSON and expects a matching [`ContactReceipt`].
#[derive(Debug, Clone)]
pub struct HttpContactSubmitter {
    http: Client,
    endpoint: Url,
}

impl HttpContactSubmitter {
    pub fn new(endpoint: &str) -> Result<Self, SubmitError> {
        let parsed = Url::parse(endpoint).map_err(|err| SubmitError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: err.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SubmitError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }
        let http = Client::builder()
            .timeout(HTTP_SUBMIT_TIMEOUT)
            .build()
            .map_err(|err| SubmitError::Transport(err.to_string()))?;
        Ok(Self {
            http,
            endpoint: parsed,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContactSubmitter for HttpContactSubmitter {
    async fn submit(&self, fields: &ContactFields) -> Result<ContactReceipt, SubmitError> {
        let request = ContactRequest::from_fields(fields);
        let res = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            let api_error = serde_json::from_str::<ApiError>(&body).ok();
            warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "contact endpoint rejected submission"
            );
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                code: api_error.as_ref().map(|err| err.code),
                message: api_error
                    .map(|err| err.message)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string()),
            });
        }

        let receipt: ContactReceipt = res
            .json()
            .await
            .map_err(|err| SubmitError::InvalidResponse(err.to_string()))?;
        if receipt.request_id != request.request_id {
            return Err(SubmitError::InvalidResponse(format!(
                "receipt for {} does not match request {}",
                receipt.request_id, request.request_id
            )));
        }
        if !receipt.accepted {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                code: None,
                message: receipt
                    .note
                    .unwrap_or_else(|| "submission was not accepted".to_string()),
            });
        }

        info!(endpoint = %self.endpoint, request_id = %receipt.request_id, "contact submission delivered");
        Ok(receipt)
    }
}

/// HTTP delivery when an endpoint is configured, the delayed stand-in otherwise.
pub fn submitter_for(
    endpoint: Option<&str>,
    fallback_delay: Duration,
) -> Result<Arc<dyn ContactSubmitter>, SubmitError> {
    match endpoint.map(str::trim).filter(|endpoint| !endpoint.is_empty()) {
        Some(endpoint) => {
            let submitter = HttpContactSubmitter::new(endpoint)?;
            info!(endpoint = %submitter.endpoint(), "contact submissions go over http");
            Ok(Arc::new(submitter))
        }
        None => {
            info!(
                delay_ms = fallback_delay.as_millis() as u64,
                "no contact endpoint configured; submissions are simulated"
            );
            Ok(Arc::new(DelayedSubmitter::new(fallback_delay)))
        }
    }
}

#[cfg(test)]
#[path = "tests/submitter_tests.rs"]
mod tests;
