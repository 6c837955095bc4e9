//! API client for the mail relay.
//!
//! One request per submission, no retry. Every failure mode, connection
//! error, non-2xx status, unparseable or success-shaped-but-negative body,
//! collapses to [`SubmissionResult::TransportFailure`]; the page shows one
//! fixed failure message regardless of cause.

use portfolio_types::{relay_base_url, ContactResponse, ContactSubmission, DEFAULT_RELAY_PORT};

use crate::events::PageEvent;
use crate::state::SubmissionResult;

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Client pointed at the relay's default port. Both sides derive the
    /// port from the same shared constant.
    pub fn with_default_port() -> Self {
        Self::new(relay_base_url(DEFAULT_RELAY_PORT))
    }

    /// POST the submission to `/contact` and map the outcome.
    pub async fn send_contact(&self, submission: &ContactSubmission) -> SubmissionResult {
        let url = format!("{}/contact", self.base_url);

        let response = match self.client.post(&url).json(submission).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("contact request failed: {}", e);
                return SubmissionResult::TransportFailure;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("contact request rejected: HTTP {}", response.status());
            return SubmissionResult::TransportFailure;
        }

        match response.json::<ContactResponse>().await {
            Ok(body) if body.is_success() => SubmissionResult::Success {
                // is_success guarantees the id is present
                id: body.id.unwrap_or_default(),
            },
            Ok(_) => SubmissionResult::TransportFailure,
            Err(e) => {
                tracing::debug!("contact response body unreadable: {}", e);
                SubmissionResult::TransportFailure
            }
        }
    }
}

/// Run one submission and wrap the outcome as the event the controller
/// consumes. Embedders await this at their single suspension point.
pub async fn run_submission(client: &ApiClient, submission: &ContactSubmission) -> PageEvent {
    PageEvent::SubmissionCompleted(client.send_contact(submission).await)
}
