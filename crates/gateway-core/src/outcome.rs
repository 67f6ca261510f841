//! # Normalized Outcomes
//!
//! The one result shape every provider variant returns, regardless of
//! backend. Callers always receive a structured success/failure value;
//! provider operations never surface a raw error past their own boundary.

use crate::error::PaymentError;
use serde::{Deserialize, Serialize};

/// Outcome of a payment attempt, normalized across all backends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PaymentOutcome {
    /// Payment accepted by the backend
    Success {
        /// Backend transaction identifier
        transaction_id: String,
        /// URL or token the customer uses to complete payment
        #[serde(skip_serializing_if = "Option::is_none")]
        payment_url: Option<String>,
        /// Merchant-side order number (echoed or synthesized)
        #[serde(skip_serializing_if = "Option::is_none")]
        order_no: Option<String>,
        /// Backend order-state code, passed through verbatim
        #[serde(skip_serializing_if = "Option::is_none")]
        order_state: Option<String>,
    },
    /// Payment rejected, either before or after the network call
    Failure {
        /// Human-readable error message
        error: String,
        /// Machine-readable backend error code, when the backend supplied one
        #[serde(skip_serializing_if = "Option::is_none")]
        code: Option<i64>,
    },
}

impl PaymentOutcome {
    /// Success with only a transaction id
    pub fn success(transaction_id: impl Into<String>) -> Self {
        PaymentOutcome::Success {
            transaction_id: transaction_id.into(),
            payment_url: None,
            order_no: None,
            order_state: None,
        }
    }

    /// Failure with a message and no backend code
    pub fn failure(error: impl Into<String>) -> Self {
        PaymentOutcome::Failure {
            error: error.into(),
            code: None,
        }
    }

    /// Failure carrying the backend's business error code
    pub fn failure_with_code(error: impl Into<String>, code: i64) -> Self {
        PaymentOutcome::Failure {
            error: error.into(),
            code: Some(code),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PaymentOutcome::Success { .. })
    }
}

impl From<PaymentError> for PaymentOutcome {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::ProviderError { message, .. } => PaymentOutcome::failure(message),
            other => PaymentOutcome::failure(other.to_string()),
        }
    }
}

/// Result of validating a provider configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the configuration is usable as-is
    pub is_valid: bool,
    /// What is wrong with it, when it is not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationReport {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(error.into()),
        }
    }
}
