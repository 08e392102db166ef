//! Top-level error type and classification.
//!
//! [`ValidationError`] is what quantity constructors return. Code that also
//! touches files or parses configuration (tuning profiles, recorded
//! telemetry) reports [`OpenRacingError`] instead.

use core::fmt;

use crate::ValidationError;

/// Top-level error type wrapping validation, configuration and I/O failures.
#[derive(Debug, thiserror::Error)]
pub enum OpenRacingError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl OpenRacingError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            OpenRacingError::Validation(_) => ErrorCategory::Validation,
            OpenRacingError::Config(_) => ErrorCategory::Config,
            OpenRacingError::Io(_) => ErrorCategory::IO,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        OpenRacingError::Config(msg.into())
    }

    /// The wrapped validation error, if any.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            OpenRacingError::Validation(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OpenRacingError {
    fn from(e: std::io::Error) -> Self {
        OpenRacingError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Configuration errors
    Config = 3,
    /// I/O errors
    IO = 4,
    /// Validation errors
    Validation = 5,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::IO => write!(f, "IO"),
            ErrorCategory::Validation => write!(f, "Validation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_display() {
        assert_eq!(ErrorCategory::Validation.to_string(), "Validation");
        assert_eq!(ErrorCategory::Config.to_string(), "Config");
        assert_eq!(ErrorCategory::IO.to_string(), "IO");
    }

    #[test]
    fn test_openracing_error_category() {
        let err: OpenRacingError = ValidationError::required("timestamp").into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(
            err.as_validation(),
            Some(&ValidationError::required("timestamp"))
        );

        let err = OpenRacingError::config("missing pid section");
        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(err.as_validation().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "profile.yaml");
        let err: OpenRacingError = io.into();
        assert_eq!(err.category(), ErrorCategory::IO);
        assert!(err.to_string().contains("profile.yaml"));
    }

    #[test]
    fn test_openracing_error_is_std_error() {
        let err = OpenRacingError::config("test");
        let _: &dyn std::error::Error = &err;
    }
}
