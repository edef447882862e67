//! Error types and handling for the `WeekPeak` application

use thiserror::Error;

/// Coordinate input validation failures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Input did not split into exactly two `", "`-separated tokens
    #[error("expected exactly two \", \"-separated values")]
    MalformedFormat,

    /// A token could not be parsed as a floating-point number
    #[error("latitude and longitude must be numeric")]
    NotANumber,
}

/// Main error type for the `WeekPeak` application
#[derive(Error, Debug)]
pub enum WeekPeakError {
    /// Input validation errors
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Transport-level failures talking to the weather API
    #[error("Network error: {source}")]
    Network {
        #[from]
        source: reqwest::Error,
    },

    /// Non-success HTTP status; carries the response body verbatim
    #[error("API error: {body}")]
    Api { body: String },

    /// Malformed or unexpected upstream JSON
    #[error("Parse error: {message}")]
    Parse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl WeekPeakError {
    /// Create a new API error from a response body
    pub fn api<S: Into<String>>(body: S) -> Self {
        Self::Api { body: body.into() }
    }

    /// Create a new parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeekPeakError::Validation(_) => {
                "Please enter a valid latitude/longitude in the correct format".to_string()
            }
            WeekPeakError::Network { source } => format!("Network error: {source}"),
            // The upstream body is the message the user is meant to see
            WeekPeakError::Api { body } => body.clone(),
            WeekPeakError::Parse { message } => {
                format!("Unexpected weather data received: {message}")
            }
            WeekPeakError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
        }
    }
}
