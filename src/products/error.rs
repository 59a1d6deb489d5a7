//! Fetch errors and the opaque descriptor stored in state.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while fetching the product list.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, reset, body read)
    #[error("Request to '{endpoint}' failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("Unexpected status {status} from '{endpoint}'")]
    Status { endpoint: String, status: u16 },

    /// Body was not a JSON array of products
    #[error("Failed to decode product list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Error carried by the failure signal.
///
/// All `FetchError` variants collapse into this single shape; views only
/// ever see the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
    message: String,
}

impl ErrorDescriptor {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<FetchError> for ErrorDescriptor {
    fn from(err: FetchError) -> Self {
        Self::new(err.to_string())
    }
}
