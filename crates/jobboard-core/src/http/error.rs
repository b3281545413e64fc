use thiserror::Error;

/// Every failure a service call can surface to a screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No token stored, or the service rejected it (HTTP 401).
    #[error("not signed in or session expired")]
    Unauthenticated,

    /// Client-side input was rejected before any request was made.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The call did not complete within the configured timeout.
    #[error("request timed out")]
    TimedOut,

    /// DNS, refused or reset connection, or another transport failure.
    #[error("network error: {0}")]
    Network(String),

    /// The service answered with an error status (or an unsuccessful envelope).
    #[error("service error (HTTP {status}): {message}")]
    Service { status: u16, message: String },

    /// A success response whose body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RequestError {
    /// True for failures a "try again" banner makes sense for.
    pub fn is_retryable(&self) -> bool {
        matches!(self, RequestError::TimedOut | RequestError::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
