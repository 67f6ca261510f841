//! # Unified-Order Request Builder
//!
//! Assembles the parameter set for a "create unified order" request, applies
//! amount-range validation, and delegates to the canonical signer. Signing is
//! the final mutation: the `sign` field is attached only after every other
//! field is in place.

use crate::config::AcaciaConfig;
use crate::signer::{self, ParamMap, SIGN_FIELD};
use chrono::Utc;
use gateway_core::{PaymentError, PaymentResult};
use rand::Rng;
use serde_json::json;

/// Inclusive amount bounds, in minor currency units (cents).
pub const MIN_AMOUNT_CENTS: i64 = 500;
pub const MAX_AMOUNT_CENTS: i64 = 10_000_000;

/// Payment-way code for this integration.
pub const WAY_CODE: &str = "ACACIA_PAY";

const DEFAULT_SUBJECT: &str = "Payment";
const DEFAULT_DESC: &str = "Payment order";
const DEFAULT_NOTIFY_URL: &str = "https://merchant.invalid/notify";

const ORDER_NO_SUFFIX_LEN: usize = 6;
const ORDER_NO_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Optional order fields. Every field has a fixed fallback except the return
/// URL, which is included in the signed parameter set only when supplied.
#[derive(Debug, Clone, Default)]
pub struct OrderOptions {
    /// Caller-supplied order number; synthesized when absent
    pub order_no: Option<String>,
    /// Free-text subject line
    pub subject: Option<String>,
    /// Free-text order description
    pub description: Option<String>,
    /// Overrides the configured notification URL
    pub notify_url: Option<String>,
    /// Browser redirect after a successful payment
    pub return_url: Option<String>,
}

/// A fully assembled, signed order request
#[derive(Debug, Clone)]
pub struct BuiltOrder {
    /// Signed parameter set, ready to submit
    pub params: ParamMap,
    /// The merchant order number used (echoed or synthesized)
    pub mch_order_no: String,
}

/// Convert a major-unit amount to minor units, rejecting out-of-range values
/// before any network call. The error message states the bound in major units.
pub fn to_minor_units(amount: f64) -> PaymentResult<i64> {
    let cents = (amount * 100.0).round() as i64;
    if !(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS).contains(&cents) {
        return Err(PaymentError::InvalidAmount {
            message: format!(
                "amount must be between {:.2} and {:.2}",
                MIN_AMOUNT_CENTS as f64 / 100.0,
                MAX_AMOUNT_CENTS as f64 / 100.0
            ),
        });
    }
    Ok(cents)
}

/// Synthesize a merchant order number: `M` + millisecond timestamp + 6
/// lowercase-alphanumeric characters. Uniqueness is probabilistic; the
/// gateway does not confirm it.
pub fn generate_order_no() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ORDER_NO_SUFFIX_LEN)
        .map(|_| ORDER_NO_CHARSET[rng.gen_range(0..ORDER_NO_CHARSET.len())] as char)
        .collect();
    format!("M{}{}", Utc::now().timestamp_millis(), suffix)
}

/// Build and sign a unified-order parameter set.
pub fn build_order(
    config: &AcaciaConfig,
    amount: f64,
    options: OrderOptions,
) -> PaymentResult<BuiltOrder> {
    let total_amount = to_minor_units(amount)?;
    let mch_order_no = options.order_no.unwrap_or_else(generate_order_no);

    let notify_url = options
        .notify_url
        .or_else(|| config.notify_url.clone())
        .unwrap_or_else(|| DEFAULT_NOTIFY_URL.to_string());

    let mut params = ParamMap::new();
    params.insert("mchNo".into(), json!(config.merchant_no));
    params.insert("appId".into(), json!(config.app_id));
    params.insert("wayCode".into(), json!(WAY_CODE));
    params.insert("mchOrderNo".into(), json!(mch_order_no));
    params.insert("totalAmount".into(), json!(total_amount));
    params.insert(
        "subject".into(),
        json!(options.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string())),
    );
    params.insert(
        "desc".into(),
        json!(options.description.unwrap_or_else(|| DEFAULT_DESC.to_string())),
    );
    params.insert("notifyUrl".into(), json!(notify_url));
    if let Some(return_url) = options.return_url {
        params.insert("returnUrl".into(), json!(return_url));
    }

    // Sign last, after all other fields are finalized.
    let signature = signer::sign(&params, &config.private_key);
    params.insert(SIGN_FIELD.into(), json!(signature));

    Ok(BuiltOrder {
        params,
        mch_order_no,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer;
    use gateway_core::GatewayConfig;

    fn config() -> AcaciaConfig {
        AcaciaConfig::from_gateway(
            &GatewayConfig::new("gw", "acacia_pay")
                .with_merchant_id("M1001")
                .with_app_id("A1")
                .with_api_key("k")
                .with_endpoint_url("https://pay.example.com/api/pay/unifiedOrder")
                .with_webhook_url("http://x"),
        )
    }

    #[test]
    fn test_amount_bounds_inclusive() {
        assert_eq!(to_minor_units(5.00).unwrap(), 500);
        assert_eq!(to_minor_units(100_000.00).unwrap(), 10_000_000);

        assert!(to_minor_units(4.99).is_err());
        assert!(to_minor_units(100_000.01).is_err());
    }

    #[test]
    fn test_amount_error_names_major_unit_bounds() {
        let err = to_minor_units(1.00).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("5.00"));
        assert!(message.contains("100000.00"));
    }

    #[test]
    fn test_amount_rounds_to_nearest_cent() {
        assert_eq!(to_minor_units(5.005).unwrap(), 501);
        assert_eq!(to_minor_units(9.999).unwrap(), 1000);
    }

    #[test]
    fn test_generated_order_no_shape() {
        let order_no = generate_order_no();

        assert!(order_no.starts_with('M'));
        let rest = &order_no[1..];
        let suffix = &rest[rest.len() - ORDER_NO_SUFFIX_LEN..];
        let millis = &rest[..rest.len() - ORDER_NO_SUFFIX_LEN];

        assert!(millis.len() >= 13, "millisecond timestamp expected");
        assert!(millis.bytes().all(|b| b.is_ascii_digit()));
        assert!(suffix
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_supplied_order_no_passes_through() {
        let built = build_order(
            &config(),
            10.00,
            OrderOptions {
                order_no: Some("ORD-42".into()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(built.mch_order_no, "ORD-42");
        assert_eq!(built.params["mchOrderNo"], "ORD-42");
    }

    #[test]
    fn test_signing_is_last_and_verifies() {
        let built = build_order(&config(), 10.00, OrderOptions::default()).unwrap();

        assert!(built.params.contains_key(SIGN_FIELD));
        assert!(signer::verify(&built.params, "k"));
    }

    #[test]
    fn test_return_url_only_when_supplied() {
        let without = build_order(&config(), 10.00, OrderOptions::default()).unwrap();
        assert!(!without.params.contains_key("returnUrl"));
        // Its absence is a valid, signed state
        assert!(signer::verify(&without.params, "k"));

        let with = build_order(
            &config(),
            10.00,
            OrderOptions {
                return_url: Some("https://shop.example.com/done".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(with.params["returnUrl"], "https://shop.example.com/done");
        assert!(signer::verify(&with.params, "k"));
    }

    #[test]
    fn test_defaults_applied() {
        let built = build_order(&config(), 10.00, OrderOptions::default()).unwrap();

        assert_eq!(built.params["subject"], DEFAULT_SUBJECT);
        assert_eq!(built.params["desc"], DEFAULT_DESC);
        // Configured webhook URL wins over the fixed fallback
        assert_eq!(built.params["notifyUrl"], "http://x");
        assert_eq!(built.params["wayCode"], WAY_CODE);
        assert_eq!(built.params["totalAmount"], 1000);
    }

    #[test]
    fn test_out_of_range_amount_never_builds() {
        assert!(build_order(&config(), 1.00, OrderOptions::default()).is_err());
    }
}
