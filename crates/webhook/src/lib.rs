//! Delivery of validated contact submissions to the external webhook.

mod client;
mod payload;
mod result;

pub use client::{WebhookClient, WebhookConfig, WebhookError};
pub use payload::{WebhookPayload, test_submission};
pub use result::SubmissionResult;
