//! Error types for the Poke API client.
//!
//! # Design
//! Every non-2xx response becomes `ApiError::Request`, whatever the status.
//! The message is the operation's failure label followed by the reason
//! phrase, e.g. `Failed to get user: Not Found`; the response body is not
//! inspected. Transport failures from `reqwest` pass through untouched.

use thiserror::Error;

use crate::operation::Operation;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{}: {status_text}", .operation.failure_label())]
    Request {
        operation: Operation,
        status: u16,
        status_text: String,
    },

    /// DNS, connect, TLS or body-read failure reported by the HTTP client.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The request payload could not be encoded as JSON.
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A 2xx response body was not valid JSON.
    #[error("deserialization failed: {0}")]
    Deserialization(#[source] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a `Request` failure, `None` for the other variants.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
