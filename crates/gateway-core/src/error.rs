//! # Payment Error Types
//!
//! Typed error handling for the gateway abstraction layer.
//! Fallible internal operations return `Result<T, PaymentError>`; the
//! provider-facing surface converts these into normalized outcomes before
//! they ever cross the provider boundary.

use thiserror::Error;

/// Core error type for all gateway operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing credentials, malformed identifiers)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Amount outside the gateway's accepted range
    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    /// Backend kind not known to the provider factory
    #[error("Unsupported payment provider: {provider}")]
    UnsupportedProvider { provider: String },

    /// Remote gateway returned a business failure
    #[error("Provider error [{provider}]: {message}")]
    ProviderError { provider: String, message: String },

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Operation not implemented by the configured backend
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::InvalidAmount { .. } => 400,
            PaymentError::UnsupportedProvider { .. } => 400,
            PaymentError::ProviderError { .. } => 502,
            PaymentError::NetworkError(_) => 503,
            PaymentError::NotImplemented(_) => 501,
            PaymentError::Serialization(_) => 500,
            PaymentError::Internal(_) => 500,
        }
    }
}

/// Result type alias for gateway operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::InvalidAmount {
                message: "too small".into()
            }
            .status_code(),
            400
        );
        assert_eq!(
            PaymentError::UnsupportedProvider {
                provider: "square".into()
            }
            .status_code(),
            400
        );
        assert_eq!(PaymentError::NetworkError("timeout".into()).status_code(), 503);
        assert_eq!(PaymentError::NotImplemented("plugin".into()).status_code(), 501);
    }

    #[test]
    fn test_error_display_names_provider() {
        let err = PaymentError::UnsupportedProvider {
            provider: "unknown".into(),
        };
        assert!(err.to_string().contains("unknown"));
    }
}
