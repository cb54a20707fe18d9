//! Error types for the book client
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are categorized by where they originate (local validation, the books API,
//! the transport, configuration) so the controller can decide what to show the user.
//!
//! ## Error Categories
//!
//! ### Local (never reach the network)
//! - Validation rule violations → `Validation`
//! - Unparsable numeric form fields → `InvalidInput`
//!
//! ### Books API
//! - Any non-2xx status → `ApiRequestFailed` (4xx and 5xx are not distinguished)
//! - 2xx with a body that is not the expected JSON → `InvalidApiResponse`
//!
//! ### Transport
//! - Connection refused, DNS failure, timeout → `NetworkError`
//!
//! ### Configuration
//! - Bad base URL or timeout → `InvalidConfiguration`

use crate::validation::ValidationError;
use thiserror::Error;

/// Result type alias using our BookClientError type
pub type Result<T> = std::result::Result<T, BookClientError>;

/// Main error type for the book client
#[derive(Error, Debug)]
pub enum BookClientError {
    // ===== Local Errors =====

    /// A client-side validation rule failed; the message names the first violated rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A form field could not be turned into the value the API expects
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===== API Errors =====

    /// The books API answered with a non-success status
    #[error("API request failed: {message}")]
    ApiRequestFailed {
        message: String,
        /// HTTP status code if available
        status_code: Option<u16>,
        /// API endpoint that failed
        endpoint: Option<String>,
    },

    /// API returned invalid or unexpected response format
    #[error("Invalid API response: {message}")]
    InvalidApiResponse {
        message: String,
        /// Response body for debugging
        response_body: Option<String>,
    },

    /// Network connectivity error
    #[error("Network error: {message}")]
    NetworkError { message: String },

    // ===== Configuration Errors =====

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // ===== External Library Errors =====

    /// HTTP client error from reqwest
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// URL parse error
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),
}

// Helper methods for creating common errors
impl BookClientError {
    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        BookClientError::InvalidInput(message.into())
    }

    /// Create an InvalidConfiguration error with a message
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        BookClientError::InvalidConfiguration(message.into())
    }

    /// Create an ApiRequestFailed error
    pub fn api_failed<S: Into<String>>(
        message: S,
        status_code: Option<u16>,
        endpoint: Option<String>,
    ) -> Self {
        BookClientError::ApiRequestFailed {
            message: message.into(),
            status_code,
            endpoint,
        }
    }

    /// Create a NetworkError
    pub fn network_error<S: Into<String>>(message: S) -> Self {
        BookClientError::NetworkError {
            message: message.into(),
        }
    }

    /// Check if error was raised locally, before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            BookClientError::Validation(_) | BookClientError::InvalidInput(_)
        )
    }

    /// Check if error came from talking to the books API
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            BookClientError::ApiRequestFailed { .. }
                | BookClientError::InvalidApiResponse { .. }
                | BookClientError::NetworkError { .. }
                | BookClientError::ReqwestError(_)
        )
    }

    /// HTTP status code, when the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BookClientError::ApiRequestFailed { status_code, .. } => *status_code,
            BookClientError::ReqwestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get user-friendly error message suitable for display
    ///
    /// Validation and input errors are shown as-is. Everything else is collapsed into a
    /// generic message since the API's error payload is never parsed.
    pub fn user_message(&self) -> String {
        match self {
            BookClientError::Validation(e) => e.to_string(),
            BookClientError::InvalidInput(message) => message.clone(),
            BookClientError::NetworkError { .. } | BookClientError::ReqwestError(_) => {
                "Could not reach the books server. Please check your connection.".to_string()
            }
            BookClientError::InvalidConfiguration(message) => {
                format!("The client is misconfigured: {}", message)
            }
            _ => "The books server could not complete the request.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BookClientError = ValidationError::MissingTitle.into();
        assert_eq!(err.to_string(), "Please enter a title.");
        assert_eq!(err.user_message(), "Please enter a title.");
        assert!(err.is_validation_error());
        assert!(!err.is_api_error());
    }

    #[test]
    fn test_api_failed_carries_status() {
        let err = BookClientError::api_failed(
            "Not Found",
            Some(404),
            Some("/api/books/9".to_string()),
        );
        assert!(err.is_api_error());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "API request failed: Not Found");
        assert_eq!(
            err.user_message(),
            "The books server could not complete the request."
        );
    }

    #[test]
    fn test_network_error_message() {
        let err = BookClientError::network_error("connection refused");
        assert!(err.is_api_error());
        assert_eq!(err.status_code(), None);
        assert!(err.user_message().contains("Could not reach"));
    }
}
