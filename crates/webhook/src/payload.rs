use mkfly_contact::{ContactFields, ContactSubmission, ValidationError};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// JSON body posted to the webhook.
///
/// A regular submission carries the five contact keys only. Connectivity
/// tests add `tipo` and `timestamp`.
#[derive(Debug, Serialize)]
pub struct WebhookPayload<'a> {
    #[serde(flatten)]
    pub submission: &'a ContactSubmission,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl<'a> From<&'a ContactSubmission> for WebhookPayload<'a> {
    fn from(submission: &'a ContactSubmission) -> Self {
        Self {
            submission,
            tipo: None,
            timestamp: None,
        }
    }
}

impl<'a> WebhookPayload<'a> {
    pub fn test(submission: &'a ContactSubmission, at: OffsetDateTime) -> Self {
        Self {
            submission,
            tipo: Some("test"),
            timestamp: at.format(&Rfc3339).ok(),
        }
    }
}

/// Fixed submission used by the connectivity test.
pub fn test_submission() -> Result<ContactSubmission, ValidationError> {
    mkfly_contact::validate(ContactFields {
        name: "Test User".to_owned(),
        company: "Test Company".to_owned(),
        email: "test@example.com".to_owned(),
        phone: "+1234567890".to_owned(),
        message: "This is a test message".to_owned(),
    })
}
