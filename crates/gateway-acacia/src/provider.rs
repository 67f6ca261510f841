//! # Acacia Pay Provider
//!
//! `PaymentProvider` implementation for the unified-order gateway: the full
//! build → sign → submit pipeline behind the normalized provider surface.

use crate::client::AcaciaClient;
use crate::config::AcaciaConfig;
use crate::order::{self, OrderOptions};
use async_trait::async_trait;
use gateway_core::{GatewayConfig, PaymentOutcome, PaymentProvider, ValidationReport};
use tracing::{debug, instrument};

/// The unified-order gateway backend
pub struct AcaciaPayProvider {
    config: AcaciaConfig,
    client: AcaciaClient,
}

impl AcaciaPayProvider {
    /// Construct from a generic gateway record. Construction never fails;
    /// unusable credentials surface through `validate_config()` and as
    /// normalized failures from `process_payment()`.
    pub fn new(record: &GatewayConfig) -> Self {
        let config = AcaciaConfig::from_gateway(record);
        let client = AcaciaClient::new(config.endpoint_url.clone());
        Self { config, client }
    }

    /// Construct with explicit typed credentials (used by tests)
    pub fn with_config(config: AcaciaConfig) -> Self {
        let client = AcaciaClient::new(config.endpoint_url.clone());
        Self { config, client }
    }
}

#[async_trait]
impl PaymentProvider for AcaciaPayProvider {
    #[instrument(skip(self), fields(provider = "acacia_pay"))]
    async fn process_payment(&self, amount: f64, currency: &str) -> PaymentOutcome {
        // The gateway is currency-implicit; the argument is logged only.
        debug!("Processing payment: amount={}, currency={}", amount, currency);

        let report = self.validate_config();
        if !report.is_valid {
            return PaymentOutcome::failure(
                report.error.unwrap_or_else(|| "invalid configuration".to_string()),
            );
        }

        let built = match order::build_order(&self.config, amount, OrderOptions::default()) {
            Ok(built) => built,
            Err(err) => return err.into(),
        };

        match self.client.submit(&built.params).await {
            // The gateway usually echoes the order number; fall back to the
            // one we synthesized when it does not.
            PaymentOutcome::Success {
                transaction_id,
                payment_url,
                order_no,
                order_state,
            } => PaymentOutcome::Success {
                transaction_id,
                payment_url,
                order_no: order_no.or(Some(built.mch_order_no)),
                order_state,
            },
            failure => failure,
        }
    }

    fn validate_config(&self) -> ValidationReport {
        self.config.validate()
    }

    fn payment_methods(&self) -> Vec<String> {
        vec!["acacia_pay".to_string()]
    }

    fn provider_name(&self) -> &'static str {
        "acacia_pay"
    }
}
