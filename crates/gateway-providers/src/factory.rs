//! # Provider Factory
//!
//! Pure mapping from a gateway record's backend-kind discriminator to a
//! constructed provider instance. Unrecognized discriminators fail fast with
//! an error naming the value.

use crate::paypal::PaypalProvider;
use crate::plugin::PluginProvider;
use crate::stripe::StripeProvider;
use gateway_acacia::AcaciaPayProvider;
use gateway_core::{BoxedPaymentProvider, GatewayConfig, PaymentError, PaymentResult};
use std::sync::Arc;
use tracing::debug;

/// Backend-kind discriminators the factory recognizes
pub const SUPPORTED_PROVIDERS: &[&str] = &["acacia_pay", "stripe", "paypal", "plugin"];

/// Construct the provider variant a gateway record asks for.
pub fn create_provider(record: &GatewayConfig) -> PaymentResult<BoxedPaymentProvider> {
    debug!("Creating provider: kind={}", record.provider);

    match record.provider.as_str() {
        "acacia_pay" => Ok(Arc::new(AcaciaPayProvider::new(record))),
        "stripe" => Ok(Arc::new(StripeProvider::new(record))),
        "paypal" => Ok(Arc::new(PaypalProvider::new(record))),
        "plugin" => Ok(Arc::new(PluginProvider::new(record))),
        other => Err(PaymentError::UnsupportedProvider {
            provider: other.to_string(),
        }),
    }
}

/// The static list of supported discriminator strings.
pub fn supported_providers() -> &'static [&'static str] {
    SUPPORTED_PROVIDERS
}
