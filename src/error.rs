//! Error types and handling for the `TourGuide` planner

use thiserror::Error;

/// Main error type for the `TourGuide` planner
#[derive(Error, Debug)]
pub enum TourGuideError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A clock string that is not `HH:MM`
    #[error("Invalid time format '{input}': expected HH:MM")]
    InvalidTimeFormat { input: String },

    /// POI catalog structure errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// Itinerary export errors
    #[error("Export error: {message}")]
    Export { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl TourGuideError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new invalid time format error
    pub fn invalid_time<S: Into<String>>(input: S) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new export error
    pub fn export<S: Into<String>>(message: S) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TourGuideError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TourGuideError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TourGuideError::InvalidTimeFormat { input } => {
                format!("'{input}' is not a valid start time. Use HH:MM, e.g. 09:00.")
            }
            TourGuideError::Catalog { message } => {
                format!("The points of interest catalog is malformed: {message}")
            }
            TourGuideError::Export { .. } | TourGuideError::Json { .. } => {
                "Failed to export the itinerary.".to_string()
            }
            TourGuideError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TourGuideError::config("bad speed");
        assert!(matches!(config_err, TourGuideError::Config { .. }));

        let validation_err = TourGuideError::validation("invalid coordinates");
        assert!(matches!(validation_err, TourGuideError::Validation { .. }));

        let time_err = TourGuideError::invalid_time("9am");
        assert!(matches!(time_err, TourGuideError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TourGuideError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TourGuideError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let time_err = TourGuideError::invalid_time("25:99");
        assert!(time_err.user_message().contains("25:99"));
        assert!(time_err.to_string().contains("Invalid time format"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TourGuideError = io_err.into();
        assert!(matches!(err, TourGuideError::Io { .. }));
    }
}
