use auth_core::{FailureMessage, message_from_payload, payload_from_text};
use serde_json::Value;

#[derive(Debug, Clone)]
pub(crate) enum ApiError {
    Network(String),
    Timeout,
    Http { status: u16, payload: Value },
}

impl ApiError {
    pub(crate) fn from_status(status: u16, body: &str) -> Self {
        Self::Http {
            status,
            payload: payload_from_text(body),
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Timeout => write!(f, "request timed out"),
            Self::Http { status, payload } => write!(f, "http error {status}: {payload}"),
        }
    }
}

impl FailureMessage for ApiError {
    fn server_message(&self) -> Option<String> {
        match self {
            Self::Http { payload, .. } => message_from_payload(payload),
            _ => None,
        }
    }
}
