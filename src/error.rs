//! Error types and handling for the trip planner

use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum TripPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A day already holds the maximum number of stops
    #[error("Day {day_no} already has {max} stops")]
    StopLimitExceeded { day_no: u32, max: usize },

    /// Place lookup returned nothing
    #[error("No place found for '{query}'")]
    PlaceNotFound { query: String },

    /// Route/cost estimation failed
    #[error("Estimation failed: {message}")]
    Estimation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Trip JSON could not be read or written
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl TripPlannerError {
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

    pub fn place_not_found<S: Into<String>>(query: S) -> Self {
        Self::PlaceNotFound {
            query: query.into(),
        }
    }

    /// Create a new estimation error
    pub fn estimation<S: Into<String>>(message: S) -> Self {
        Self::Estimation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripPlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TripPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TripPlannerError::StopLimitExceeded { max, .. } => {
                format!("Max {max} stops allowed per day.")
            }
            TripPlannerError::PlaceNotFound { query } => {
                format!("Could not find '{query}'. Try another search.")
            }
            TripPlannerError::Estimation { .. } => {
                "Failed to calculate trip. Please try again.".to_string()
            }
            TripPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TripPlannerError::Json { .. } => {
                "Trip file is not valid trip JSON.".to_string()
            }
            TripPlannerError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TripPlannerError::config("bad road factor");
        assert!(matches!(config_err, TripPlannerError::Config { .. }));

        let validation_err = TripPlannerError::validation("invalid coordinates");
        assert!(matches!(validation_err, TripPlannerError::Validation { .. }));

        let place_err = TripPlannerError::place_not_found("Atlantis");
        assert!(matches!(place_err, TripPlannerError::PlaceNotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        let stop_err = TripPlannerError::StopLimitExceeded { day_no: 2, max: 10 };
        assert_eq!(stop_err.user_message(), "Max 10 stops allowed per day.");
        assert_eq!(stop_err.to_string(), "Day 2 already has 10 stops");

        let estimation_err = TripPlannerError::estimation("no days");
        assert!(estimation_err.user_message().contains("Failed to calculate trip"));

        let validation_err = TripPlannerError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TripPlannerError = io_err.into();
        assert!(matches!(err, TripPlannerError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TripPlannerError = json_err.into();
        assert!(matches!(err, TripPlannerError::Json { .. }));
    }
}
