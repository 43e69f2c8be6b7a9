//! Contact-form submission.
//!
//! The only network interaction in the application: one JSON POST to a
//! form-relay endpoint. The response is classified purely by HTTP status
//! class; the body is never read. There is no retry and no cancellation;
//! a dropped request surfaces as a failure message and the user may
//! resubmit by hand.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::FormConfig;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const REJECTED_MESSAGE: &str = "Failed to send message. Please try again.";
pub const UNREACHABLE_MESSAGE: &str = "An error occurred. Please try again later.";

/// Errors that can occur while setting up the submitter.
///
/// Failures of the submission itself are not errors at this level:
/// they are classified into a [`SubmissionResult`] for display.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

/// The serialized form payload: `{name, email, message}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Outcome of one submission attempt, shown transiently to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
}

impl SubmissionResult {
    /// The relay accepted the submission (2xx).
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    /// The relay answered with a non-2xx status.
    pub fn rejected() -> Self {
        Self {
            success: false,
            message: REJECTED_MESSAGE.to_string(),
        }
    }

    /// The request never completed (connect failure, dropped socket, ...).
    pub fn unreachable() -> Self {
        Self {
            success: false,
            message: UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

/// Submits contact-form payloads to the configured relay endpoint.
#[derive(Clone)]
pub struct FormSubmitter {
    client: Client,
    endpoint: String,
}

impl FormSubmitter {
    pub fn new(config: &FormConfig) -> Result<Self, SubmitError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(SubmitError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.endpoint_url.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the payload and classify the outcome.
    ///
    /// There are exactly three outcomes: 2xx, non-2xx, and transport
    /// failure. No deliberate overall timeout is applied; the request
    /// resolves or fails according to the transport's own behavior.
    pub async fn submit(&self, payload: &ContactPayload) -> SubmissionResult {
        tracing::debug!(endpoint = %self.endpoint, "submitting contact form");

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                tracing::debug!(status = %resp.status(), "form relay accepted submission");
                SubmissionResult::sent()
            }
            Ok(resp) => {
                tracing::warn!(status = %resp.status(), "form relay rejected submission");
                SubmissionResult::rejected()
            }
            Err(err) => {
                tracing::warn!(error = %err, "contact form submission failed in transport");
                SubmissionResult::unreachable()
            }
        }
    }
}
