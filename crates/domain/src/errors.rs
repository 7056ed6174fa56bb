//! Error types for remote platform calls.
//!
//! Every repository operation reports failures as an [`ApiError`]. Its
//! `Display` output is the message shown to the user, so variants carry
//! the server's own description when one was returned.

/// Result alias for repository operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failure of a call against the platform API
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("Server error, status code: {status}, error code: {code}, message: {description}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Platform error code, `"unknown"` when the body carried none
        code: String,
        /// Human readable description from the server
        description: String,
    },

    /// The request never produced a response
    #[error("Error performing request: {0}")]
    Transport(String),

    /// The response body could not be decoded
    #[error("Invalid response from server: {0}")]
    Decode(String),

    /// A configured endpoint is not a usable URL
    #[error("Invalid API endpoint: {0}")]
    InvalidEndpoint(String),
}

impl ApiError {
    /// Build an HTTP error from its parts
    pub fn http(status: u16, code: Option<&str>, description: impl Into<String>) -> Self {
        Self::Http {
            status,
            code: code.unwrap_or("unknown").to_string(),
            description: description.into(),
        }
    }

    /// Status code of an HTTP error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the server reported the resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ApiError::http(403, Some("CF-NotAuthorized"), "You are not authorized");
        assert_eq!(
            err.to_string(),
            "Server error, status code: 403, error code: CF-NotAuthorized, message: You are not authorized"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_http_error_without_code() {
        let err = ApiError::http(404, None, "missing");
        assert!(err.is_not_found());
        assert!(err.to_string().contains("error code: unknown"));
    }

    #[test]
    fn test_transport_error_has_no_status() {
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }
}
