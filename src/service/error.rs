//! Errors from talking to the summary service.
//!
//! None of these reach the user verbatim; the controller collapses them into
//! one generic message and logs the detail.

use thiserror::Error;

/// Errors that can occur while fetching a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// Configured base URL cannot be turned into a request URL
    #[error("Invalid service endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Failed to connect or the transfer broke off
    #[error("Connection to '{endpoint}' failed: {source}")]
    Connection {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout {
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not `{"summary": string}`
    #[error("Malformed response body: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl SummaryError {
    /// Short error type string for log lines.
    pub fn error_type(&self) -> &'static str {
        match self {
            SummaryError::InvalidEndpoint { .. } => "invalid_endpoint",
            SummaryError::Connection { .. } => "connection_error",
            SummaryError::Timeout { .. } => "timeout",
            SummaryError::Status { .. } => "status_error",
            SummaryError::Decode { .. } => "decode_error",
        }
    }

    /// HTTP status returned by the service, if it got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            SummaryError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
