//! Error types for server requests.

use thiserror::Error;

/// Errors that can occur while talking to the server.
///
/// The client returns replies as data whatever their `success` field says;
/// [`ApiError::Rejected`] is produced when a caller turns a refused reply
/// into an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be built or sent (offline, CORS, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-2xx status and no usable body
    #[error("Server responded with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Body was not the expected JSON
    #[error("Invalid server response: {0}")]
    Decode(String),

    /// Server answered but refused the request
    #[error("{0}")]
    Rejected(String),
}

impl ApiError {
    /// Create a network error from any displayable cause.
    pub fn network(cause: impl std::fmt::Display) -> Self {
        Self::Network(cause.to_string())
    }

    /// Create a decode error from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode(cause.to_string())
    }

    /// Create a rejection carrying the server's message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected(message.into())
    }
}
