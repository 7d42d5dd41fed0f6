use std::fmt;

/// Outcome of a single delivery attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    /// The endpoint answered with a non-2xx status.
    ServerError {
        status: u16,
        /// Canonical reason phrase for `status`, not the phrase the server sent.
        /// Empty for codes without a registered phrase.
        status_text: String,
        body: String,
    },
    TransportError {
        message: String,
    },
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success)
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionResult::Success => write!(f, "submission delivered"),
            SubmissionResult::ServerError {
                status,
                status_text,
                body,
            } => write!(f, "server error: {status} {status_text}. Detail: {body}"),
            SubmissionResult::TransportError { message } => write!(f, "{message}"),
        }
    }
}
