//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty or a control value was out of range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential mismatch, or an action that needs a logged-in session
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Registration with a username that is already taken
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Errors a session recovers from by staying on the current page
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Auth(_) | Error::Conflict(_))
    }

    /// Translation key for the error category
    pub fn category_key(&self) -> &'static str {
        match self {
            Error::Validation(_) => "error.validation",
            Error::Auth(_) => "error.auth",
            Error::Conflict(_) => "error.conflict",
            Error::Config(_) => "error.config",
            Error::Io(_) => "error.io",
            Error::Serialization(_) => "error.serialization",
        }
    }

    /// The human-readable detail without the category prefix
    pub fn detail(&self) -> String {
        match self {
            Error::Validation(msg)
            | Error::Auth(msg)
            | Error::Conflict(msg)
            | Error::Config(msg)
            | Error::Serialization(msg) => msg.clone(),
            Error::Io(e) => e.to_string(),
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_errors_are_recoverable() {
        assert!(Error::Validation("x".into()).is_recoverable());
        assert!(Error::Auth("x".into()).is_recoverable());
        assert!(Error::Conflict("x".into()).is_recoverable());
        assert!(!Error::Config("x".into()).is_recoverable());
    }

    #[test]
    fn test_display_and_detail() {
        let err = Error::Conflict("Username 'alice' already exists".into());
        assert_eq!(err.to_string(), "Conflict: Username 'alice' already exists");
        assert_eq!(err.detail(), "Username 'alice' already exists");
        assert_eq!(err.category_key(), "error.conflict");
    }
}
