use std::error::Error as StdError;
use std::fmt;

use serde_json::Value;

/// Parsed JSON returned by a successful submission; `Null` when the body was
/// empty or not JSON.
pub type SubmissionResult = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    InvalidRequest,
    HttpStatus(u16),
    Timeout,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::InvalidRequest => write!(f, "invalid request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// The one error a submission can fail with.
///
/// `http_status` is set exactly when the backend answered; `payload` holds
/// the parsed error body when there was one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct SubmissionError {
    pub kind: FailureKind,
    pub message: String,
    pub http_status: Option<u16>,
    pub payload: Option<Value>,
}

impl SubmissionError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            http_status: None,
            payload: None,
        }
    }

    /// Error for a non-2xx response. The backend's `error` field becomes the
    /// message when it is a non-empty string.
    pub fn from_response(status: u16, payload: Option<Value>) -> Self {
        let message = payload
            .as_ref()
            .and_then(|body| body.get("error"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Request failed with status {status}"));
        Self {
            kind: FailureKind::HttpStatus(status),
            message,
            http_status: Some(status),
            payload,
        }
    }

    pub fn is_http_error(&self) -> bool {
        self.http_status.is_some()
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == FailureKind::Timeout
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> SubmissionError {
    let message = describe_error(&err);
    if err.is_timeout() {
        return SubmissionError::new(FailureKind::Timeout, message);
    }
    if err.is_builder() {
        return SubmissionError::new(FailureKind::InvalidUrl, message);
    }
    SubmissionError::new(FailureKind::Network, message)
}

/// Flattens an error and its sources into one line, e.g.
/// `error sending request: client error (Connect): Connection refused`.
pub(crate) fn describe_error(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
