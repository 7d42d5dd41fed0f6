use std::time::Duration;

use mkfly_contact::ContactSubmission;
use reqwest::{Client, Url, header};
use serde::Deserialize;
use time::OffsetDateTime;

use crate::{SubmissionResult, WebhookPayload};

#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("invalid webhook url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize, Clone)]
pub struct WebhookConfig {
    pub url: String,
    /// Request timeout. Unset means the request runs until the transport
    /// gives up.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Posts contact submissions to the configured webhook.
///
/// Every call is a single attempt: failures are returned, never retried.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: Client,
    url: Url,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self, WebhookError> {
        let invalid = |reason: String| WebhookError::InvalidUrl {
            url: config.url.to_owned(),
            reason,
        };

        let url = Url::parse(&config.url).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }

        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        tracing::info!(url = %url, timeout_secs = ?config.timeout_secs, "Webhook client initialized");

        Ok(Self {
            http: builder.build()?,
            url,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub async fn send(&self, submission: &ContactSubmission) -> SubmissionResult {
        self.post(&WebhookPayload::from(submission)).await
    }

    /// Sends `submission` tagged as a connectivity test.
    pub async fn send_test(
        &self,
        submission: &ContactSubmission,
        at: OffsetDateTime,
    ) -> SubmissionResult {
        self.post(&WebhookPayload::test(submission, at)).await
    }

    #[tracing::instrument(skip_all, fields(url = %self.url))]
    async fn post(&self, payload: &WebhookPayload<'_>) -> SubmissionResult {
        tracing::info!("Sending contact form to webhook");

        let response = match self
            .http
            .post(self.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Webhook request failed");
                return SubmissionResult::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "Contact form delivered");
            return SubmissionResult::Success;
        }

        let status_text = status.canonical_reason().unwrap_or_default().to_owned();

        match response.text().await {
            Ok(body) => {
                tracing::error!(status = status.as_u16(), body = %body, "Webhook rejected contact form");
                SubmissionResult::ServerError {
                    status: status.as_u16(),
                    status_text,
                    body,
                }
            }
            Err(e) => {
                tracing::error!(status = status.as_u16(), error = %e, "Failed to read webhook response");
                SubmissionResult::TransportError {
                    message: e.to_string(),
                }
            }
        }
    }
}
