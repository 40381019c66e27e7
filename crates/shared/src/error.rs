//! Errors surfaced by calls to the backend collaborator.

use thiserror::Error;

/// Result type alias using `BackendError`.
pub type BackendResult<T> = Result<T, BackendError>;

/// Errors returned by backend calls.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Bearer token missing, expired, or rejected (HTTP 401).
    #[error("Session expired, sign in again")]
    SessionExpired,

    /// The backend rejected a write because the data changed underneath
    /// it (HTTP 400/409). Never retried; the caller must reload first.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found (HTTP 404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backend answered with an unexpected status.
    #[error("Backend error (HTTP {status}): {message}")]
    Api {
        /// The HTTP status code returned.
        status: u16,
        /// The message body, if any.
        message: String,
    },

    /// The backend could not be reached.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Maps an HTTP error status plus body message to the matching variant.
    #[must_use]
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::SessionExpired,
            400 | 409 => Self::Conflict(message),
            404 => Self::NotFound(message),
            _ => Self::Api { status, message },
        }
    }

    /// Returns true if retrying the same call may succeed.
    ///
    /// Only network failures qualify, and even those are retried on
    /// explicit user action, never automatically.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Returns the error code for log events.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::Conflict(_) => "CONFLICT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Api { .. } => "API_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
        }
    }
}
