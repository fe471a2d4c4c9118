//! Error types delivered to callers.
//!
//! # Design
//! Two failure categories stay separate. `Http` means a response arrived
//! with a status outside 200-299 and carries that status plus the body.
//! `Network` means no response arrived at all, so there is no status to
//! report. A body that is not valid JSON is never an error.

use serde_json::Value;
use thiserror::Error;

/// The failure half of an `Outcome`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// Response payload, JSON-decoded when possible, else the raw text.
        body: Value,
    },

    /// The request never produced a response.
    #[error("Network error")]
    Network { message: String },
}

impl RequestError {
    /// Status code of an HTTP failure; `None` for network failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            RequestError::Network { .. } => None,
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            RequestError::Http { body, .. } => Some(body),
            RequestError::Network { .. } => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, RequestError::Network { .. })
    }
}

impl From<TransportError> for RequestError {
    fn from(err: TransportError) -> Self {
        RequestError::Network {
            message: err.to_string(),
        }
    }
}

/// Raised by a `Transport` when it could not obtain a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
