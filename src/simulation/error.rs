//! Error types and handling
//!
//! The admission engine itself is permissive; these errors cover the few
//! operations that can genuinely fail (looking up unknown patrons, loading and
//! validating scenarios, rendering reports).

use crate::types::{ConfigError, ConfigValidationError, PatronId};
use thiserror::Error;

/// Errors raised by museum and scenario operations
#[derive(Debug, Error)]
pub enum MuseumError {
    /// Patron id is not on the museum's roster
    #[error("Unknown patron: {0}")]
    UnknownPatron(PatronId),

    /// An exhibit could not be built
    #[error("Invalid exhibit: {0}")]
    InvalidExhibit(String),

    /// A patron could not be built
    #[error("Invalid patron: {0}")]
    InvalidPatron(String),

    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl From<ConfigError> for MuseumError {
    fn from(error: ConfigError) -> Self {
        MuseumError::ConfigurationError(error.to_string())
    }
}

impl From<ConfigValidationError> for MuseumError {
    fn from(error: ConfigValidationError) -> Self {
        match error {
            ConfigValidationError::InvalidExhibit { .. } => {
                MuseumError::InvalidExhibit(error.to_string())
            }
            ConfigValidationError::InvalidPatron { .. } => {
                MuseumError::InvalidPatron(error.to_string())
            }
            other => MuseumError::ConfigurationError(other.to_string()),
        }
    }
}

impl MuseumError {
    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            MuseumError::UnknownPatron(_) => "Admission",
            MuseumError::InvalidExhibit(_) => "Exhibit",
            MuseumError::InvalidPatron(_) => "Patron",
            MuseumError::ConfigurationError(_) => "Configuration",
            MuseumError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for museum operations
pub type MuseumResult<T> = Result<T, MuseumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_config_error() {
        let error: MuseumError = ConfigError::FileNotFound("dmns.json".to_string()).into();
        assert!(matches!(error, MuseumError::ConfigurationError(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Configuration file not found: dmns.json"
        );
    }

    #[test]
    fn test_error_from_json_error() {
        let json_error = serde_json::from_str::<u64>("not json").unwrap_err();
        let error: MuseumError = json_error.into();
        assert!(matches!(error, MuseumError::SerializationError(_)));
        assert_eq!(error.category(), "Serialization");
    }

    #[test]
    fn test_error_from_validation_error() {
        let error: MuseumError = ConfigValidationError::InvalidExhibit {
            index: 2,
            reason: "name must not be empty".to_string(),
        }
        .into();
        assert!(matches!(error, MuseumError::InvalidExhibit(_)));
        assert!(error.to_string().contains("index 2"));

        let error: MuseumError = ConfigValidationError::InvalidPatron {
            index: 0,
            reason: "name must not be empty".to_string(),
        }
        .into();
        assert_eq!(error.category(), "Patron");

        let error: MuseumError = ConfigValidationError::EmptyMuseumName.into();
        assert_eq!(error.category(), "Configuration");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(MuseumError::UnknownPatron(PatronId::new()).category(), "Admission");
        assert_eq!(MuseumError::InvalidPatron("x".to_string()).category(), "Patron");
        assert_eq!(MuseumError::InvalidExhibit("x".to_string()).category(), "Exhibit");
    }
}
