//! Storage error types.

use thiserror::Error;

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Nothing is stored under the identifier.
    #[error("blob not found: {id}")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },

    /// Local filesystem failure.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Relational backend failure.
    #[error("database operation failed: {0}")]
    Database(String),

    /// The remote endpoint rejected our credentials or signature.
    #[error("remote authentication failed with status {status}: {body}")]
    Auth {
        /// HTTP status returned by the endpoint.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// The remote endpoint answered with an unexpected status.
    #[error("remote request failed with status {status}: {body}")]
    Remote {
        /// HTTP status returned by the endpoint.
        status: u16,
        /// Response body, verbatim.
        body: String,
    },

    /// Transport-level failure (connect, timeout, body read).
    #[error("http request failed: {0}")]
    Http(String),

    /// Storage provider configuration error.
    #[error("storage configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a database error.
    #[must_use]
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// Create a configuration error.
    #[must_use]
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Classify a non-success response from the remote endpoint.
    #[must_use]
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => Self::Auth { status, body },
            _ => Self::Remote { status, body },
        }
    }

    /// Whether this error means the blob does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_classifies_auth() {
        assert!(matches!(
            StorageError::from_status(403, "SignatureDoesNotMatch"),
            StorageError::Auth { status: 403, .. }
        ));
        assert!(matches!(
            StorageError::from_status(401, ""),
            StorageError::Auth { status: 401, .. }
        ));
        assert!(matches!(
            StorageError::from_status(500, "oops"),
            StorageError::Remote { status: 500, .. }
        ));
    }

    #[test]
    fn test_remote_error_surfaces_body() {
        let err = StorageError::from_status(503, "<Error>SlowDown</Error>");
        assert_eq!(
            err.to_string(),
            "remote request failed with status 503: <Error>SlowDown</Error>"
        );
    }

    #[test]
    fn test_not_found() {
        let err = StorageError::not_found("a");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "blob not found: a");
    }
}
