//! Error types for HATX API operations.

use thiserror::Error;

/// Result type alias for HATX operations.
pub type HatxResult<T> = Result<T, HatxError>;

/// Errors related to HATX API operations.
#[derive(Debug, Error)]
pub enum HatxError {
    /// The client was constructed with an unusable configuration.
    #[error("Invalid client configuration: {message}")]
    Configuration {
        /// Description of what was wrong with the configuration
        message: String,
    },

    /// A method argument was rejected before any request was sent.
    #[error("{message}")]
    Validation {
        /// Description of the rejected argument
        message: String,
    },

    /// API request failed with an HTTP error status.
    #[error("HATX API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = HatxError::ApiRequestFailed {
            status: 404,
            url: "https://hatx.example.org/api/v1/bead".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("hatx.example.org"));
    }

    #[test]
    fn test_validation_error_message_is_verbatim() {
        let error = HatxError::Validation {
            message: "Expected a non-empty value for allele.".to_string(),
        };
        assert_eq!(error.to_string(), "Expected a non-empty value for allele.");
    }

    #[test]
    fn test_configuration_error_message() {
        let error = HatxError::Configuration {
            message: "HatxClient requires a base URL.".to_string(),
        };
        assert!(error.to_string().contains("base URL"));
    }
}
