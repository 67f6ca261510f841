//! # Stripe Provider (placeholder)
//!
//! Placeholder backend: it validates credential shape and enumerates
//! methods, but `process_payment` returns a synthetic success in both test
//! and live mode. This is an explicit placeholder contract, not a real
//! Stripe integration.

use crate::synthetic_transaction_id;
use async_trait::async_trait;
use gateway_core::{GatewayConfig, PaymentOutcome, PaymentProvider, ValidationReport};
use tracing::{debug, instrument};

/// Stripe card-processor backend (stubbed)
pub struct StripeProvider {
    /// Secret key, read from the generic record's `api_key` field
    secret_key: Option<String>,
    is_test_mode: bool,
}

impl StripeProvider {
    pub fn new(record: &GatewayConfig) -> Self {
        Self {
            secret_key: record.api_key.clone(),
            is_test_mode: record.is_test_mode,
        }
    }
}

#[async_trait]
impl PaymentProvider for StripeProvider {
    #[instrument(skip(self), fields(provider = "stripe"))]
    async fn process_payment(&self, amount: f64, currency: &str) -> PaymentOutcome {
        let prefix = if self.is_test_mode { "pi_test" } else { "pi_live" };
        debug!(
            "Stripe placeholder charge: amount={}, currency={}, mode={}",
            amount, currency, prefix
        );
        PaymentOutcome::success(synthetic_transaction_id(prefix))
    }

    fn validate_config(&self) -> ValidationReport {
        match self.secret_key.as_deref() {
            None | Some("") => ValidationReport::invalid("api_key (secret key) is required"),
            Some(key) if !key.starts_with("sk_") => {
                ValidationReport::invalid("api_key must start with sk_")
            }
            Some(_) => ValidationReport::valid(),
        }
    }

    fn payment_methods(&self) -> Vec<String> {
        vec![
            "card".to_string(),
            "apple_pay".to_string(),
            "google_pay".to_string(),
        ]
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_sk_prefix() {
        let valid = StripeProvider::new(
            &GatewayConfig::new("gw", "stripe").with_api_key("sk_test_abc123"),
        );
        assert!(valid.validate_config().is_valid);

        let wrong_shape =
            StripeProvider::new(&GatewayConfig::new("gw", "stripe").with_api_key("pk_test_abc"));
        assert!(!wrong_shape.validate_config().is_valid);

        let missing = StripeProvider::new(&GatewayConfig::new("gw", "stripe"));
        assert!(!missing.validate_config().is_valid);
    }

    #[test]
    fn test_three_payment_methods() {
        let provider = StripeProvider::new(&GatewayConfig::new("gw", "stripe"));
        assert_eq!(provider.payment_methods().len(), 3);
        assert_eq!(provider.payment_methods()[0], "card");
    }

    #[tokio::test]
    async fn test_synthetic_success_in_both_modes() {
        let test = StripeProvider::new(
            &GatewayConfig::new("gw", "stripe")
                .with_api_key("sk_test_abc")
                .with_test_mode(true),
        );
        match test.process_payment(25.00, "USD").await {
            PaymentOutcome::Success { transaction_id, .. } => {
                assert!(transaction_id.starts_with("pi_test"))
            }
            other => panic!("expected success, got {:?}", other),
        }

        let live = StripeProvider::new(
            &GatewayConfig::new("gw", "stripe").with_api_key("sk_live_abc"),
        );
        match live.process_payment(25.00, "USD").await {
            PaymentOutcome::Success { transaction_id, .. } => {
                assert!(transaction_id.starts_with("pi_live"))
            }
            other => panic!("expected success, got {:?}", other),
        }
    }
}
