//! Error types for the brink-loyalty client.
//!
//! Only failures that prevent an envelope from being produced are errors. A
//! remote 4xx/5xx status or a body that is not JSON still yields a normal
//! [`Envelope`](crate::response::Envelope).

use thiserror::Error;

/// Main error type for loyalty API operations.
#[derive(Error, Debug)]
pub enum LoyaltyError {
    /// No configuration was established before a client was requested
    #[error("brink-loyalty is not configured; call brink_loyalty::configure first")]
    NotConfigured,

    /// The configured base URL cannot be combined with an endpoint path
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Network-level failure (connection, TLS, timeout, DNS)
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl LoyaltyError {
    /// Returns true for failures caused by the configured base URL or API key.
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoyaltyError::ConfigurationError(_))
    }

    /// Returns true when the transport gave up because of a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, LoyaltyError::TransportError(e) if e.is_timeout())
    }
}

/// Result type alias for loyalty API operations.
pub type Result<T> = std::result::Result<T, LoyaltyError>;

impl From<url::ParseError> for LoyaltyError {
    fn from(err: url::ParseError) -> Self {
        LoyaltyError::ConfigurationError(format!("invalid base URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = LoyaltyError::ConfigurationError("base URL is not configured".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: base URL is not configured"
        );

        assert!(LoyaltyError::NotConfigured
            .to_string()
            .contains("not configured"));
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("not a number").unwrap_err();
        let err: LoyaltyError = json_err.into();
        assert!(matches!(err, LoyaltyError::JsonError(_)));

        let url_err = url::Url::parse("not a url").unwrap_err();
        let err: LoyaltyError = url_err.into();
        assert!(matches!(err, LoyaltyError::ConfigurationError(_)));
        assert!(err.to_string().contains("invalid base URL"));

        let reqwest_err = reqwest::Client::new().get("http://[::1").build().unwrap_err();
        let err: LoyaltyError = reqwest_err.into();
        assert!(matches!(err, LoyaltyError::TransportError(_)));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_configuration_classification() {
        assert!(LoyaltyError::ConfigurationError("x".into()).is_configuration());
        assert!(LoyaltyError::from(url::ParseError::EmptyHost).is_configuration());
        assert!(!LoyaltyError::NotConfigured.is_configuration());
        assert!(!LoyaltyError::NotConfigured.is_timeout());
    }
}
