//! Error types for ScraperAPI requests.

use thiserror::Error;

/// Result type for ScraperAPI wrappers.
pub type Result<T> = std::result::Result<T, ScraperApiError>;

/// Failures raised by the request wrappers.
///
/// Messages never include the query string, so the API key cannot leak into
/// an error observation handed back to a model.
#[derive(Error, Debug)]
pub enum ScraperApiError {
    /// Missing credential, bad configuration, or rejected arguments
    #[error(transparent)]
    Core(#[from] scrapi_core::Error),

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS, timeout or body-read failure
    #[error("Request to {endpoint} failed: {detail}")]
    Transport {
        endpoint: String,
        detail: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-2xx status
    #[error("{status} {class} Error: {reason} for url: {endpoint}")]
    Status {
        status: u16,
        class: &'static str,
        reason: String,
        endpoint: String,
    },
}

impl ScraperApiError {
    pub(crate) fn transport(endpoint: &str, err: reqwest::Error) -> Self {
        let err = err.without_url();
        let detail = if err.is_timeout() {
            "operation timed out".to_string()
        } else {
            error_chain(&err)
        };
        ScraperApiError::Transport {
            endpoint: endpoint.to_string(),
            detail,
            source: err,
        }
    }

    pub(crate) fn status(endpoint: &str, status: reqwest::StatusCode) -> Self {
        let class = if status.is_client_error() {
            "Client"
        } else if status.is_server_error() {
            "Server"
        } else {
            "HTTP"
        };
        ScraperApiError::Status {
            status: status.as_u16(),
            class,
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    /// HTTP status code for `Status` failures
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ScraperApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for connection-level failures (no HTTP status received)
    pub fn is_transport(&self) -> bool {
        matches!(self, ScraperApiError::Transport { .. })
    }
}

// reqwest's top-level message is generic ("error sending request"); the cause
// chain carries the useful part (connection refused, dns error, ...)
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
