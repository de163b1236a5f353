//! REST client error types.

use thiserror::Error;

/// Errors from the shared REST client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RestError {
    /// Client could not be built or the request could not be sent.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// Body could not be decoded into the expected type.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Retries exhausted on a transient failure.
    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
        /// Last transient failure observed.
        last_error: String,
    },
}

impl RestError {
    /// Whether the server rejected the credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_statuses() {
        let err = RestError::Status {
            status: 401,
            message: String::new(),
        };
        assert!(err.is_unauthorized());

        let err = RestError::Status {
            status: 403,
            message: String::new(),
        };
        assert!(err.is_unauthorized());

        let err = RestError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn display() {
        let err = RestError::MaxRetriesExceeded {
            attempts: 3,
            last_error: "HTTP 503".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Max retries exceeded after 3 attempts: HTTP 503"
        );
    }
}
