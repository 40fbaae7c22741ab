//! Backend error types

use thiserror::Error;

/// Errors surfaced by [`super::Backend`] implementations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(String),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed or session missing
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackendError {
    /// Create error from HTTP status code
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError { status, message },
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_specific_variants() {
        assert!(matches!(
            BackendError::from_status(401, String::new()),
            BackendError::AuthenticationFailed(_)
        ));
        assert!(matches!(
            BackendError::from_status(404, String::new()),
            BackendError::NotFound(_)
        ));
        assert!(matches!(
            BackendError::from_status(500, String::new()),
            BackendError::ServerError { status: 500, .. }
        ));
    }
}
