//! # PayPal Provider (placeholder)
//!
//! Placeholder backend, same contract as the Stripe stub: credential shape
//! checks and a fixed method list, with synthetic payment outcomes and no
//! network interaction.

use crate::synthetic_transaction_id;
use async_trait::async_trait;
use gateway_core::{GatewayConfig, PaymentOutcome, PaymentProvider, ValidationReport};
use tracing::{debug, instrument};

/// PayPal backend (stubbed)
pub struct PaypalProvider {
    /// PayPal client id, carried in the generic record's `api_key` field
    client_id: Option<String>,
    /// Merchant account email/id, carried in `merchant_id`
    merchant_id: Option<String>,
    is_test_mode: bool,
}

impl PaypalProvider {
    pub fn new(record: &GatewayConfig) -> Self {
        Self {
            client_id: record.api_key.clone(),
            merchant_id: record.merchant_id.clone(),
            is_test_mode: record.is_test_mode,
        }
    }
}

#[async_trait]
impl PaymentProvider for PaypalProvider {
    #[instrument(skip(self), fields(provider = "paypal"))]
    async fn process_payment(&self, amount: f64, currency: &str) -> PaymentOutcome {
        let prefix = if self.is_test_mode {
            "PAYID-SANDBOX"
        } else {
            "PAYID"
        };
        debug!(
            "PayPal placeholder charge: amount={}, currency={}, mode={}",
            amount, currency, prefix
        );
        PaymentOutcome::success(synthetic_transaction_id(prefix))
    }

    fn validate_config(&self) -> ValidationReport {
        if self.client_id.as_deref().unwrap_or_default().is_empty() {
            return ValidationReport::invalid("api_key (client id) is required");
        }
        if self.merchant_id.as_deref().unwrap_or_default().is_empty() {
            return ValidationReport::invalid("merchant_id is required");
        }
        ValidationReport::valid()
    }

    fn payment_methods(&self) -> Vec<String> {
        vec!["paypal".to_string(), "card".to_string()]
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}
