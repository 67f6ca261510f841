//! # Acacia Configuration
//!
//! Typed credentials for the Acacia unified-order gateway, adapted from the
//! generic `GatewayConfig` record at construction time. The generic record
//! reuses its credential fields per backend; the mapping for this backend is
//! documented field by field below.
//!
//! The signing secret and endpoint are configuration, never source literals,
//! so they rotate without a redeploy.

use gateway_core::{GatewayConfig, ValidationReport};

/// Acacia Pay gateway credentials
#[derive(Debug, Clone)]
pub struct AcaciaConfig {
    /// Merchant number at the gateway (`mchNo`). Stored in the generic
    /// record's `merchant_id` field. Must match `M<digits>`.
    pub merchant_no: String,

    /// Application id at the gateway (`appId`). Stored in `app_id`.
    pub app_id: String,

    /// Shared signing secret. Stored in the generic record's `api_key` field.
    pub private_key: String,

    /// Unified-order endpoint URL. Stored in `endpoint_url`.
    pub endpoint_url: String,

    /// Asynchronous notification callback. Stored in `webhook_url`.
    pub notify_url: Option<String>,

    /// Sandbox flag, passed through for logging only; the gateway
    /// distinguishes test merchants by credentials, not by a flag.
    pub is_test_mode: bool,
}

impl AcaciaConfig {
    /// Adapt the generic gateway record to Acacia field meanings.
    ///
    /// Missing fields become empty strings so that construction never fails;
    /// `validate()` reports what is unusable.
    pub fn from_gateway(record: &GatewayConfig) -> Self {
        Self {
            merchant_no: record.merchant_id.clone().unwrap_or_default(),
            app_id: record.app_id.clone().unwrap_or_default(),
            private_key: record.api_key.clone().unwrap_or_default(),
            endpoint_url: record.endpoint_url.clone().unwrap_or_default(),
            notify_url: record.webhook_url.clone(),
            is_test_mode: record.is_test_mode,
        }
    }

    /// Local shape check of the credentials; no network call.
    pub fn validate(&self) -> ValidationReport {
        if !merchant_no_is_valid(&self.merchant_no) {
            return ValidationReport::invalid(format!(
                "merchant_id must match M<digits>, got '{}'",
                self.merchant_no
            ));
        }
        if self.app_id.is_empty() {
            return ValidationReport::invalid("app_id is required");
        }
        if self.private_key.is_empty() {
            return ValidationReport::invalid("api_key (signing secret) is required");
        }
        if self.endpoint_url.is_empty() {
            return ValidationReport::invalid("endpoint_url is required");
        }
        ValidationReport::valid()
    }
}

/// Merchant numbers are `M` followed by one or more ASCII digits.
fn merchant_no_is_valid(merchant_no: &str) -> bool {
    match merchant_no.strip_prefix('M') {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> GatewayConfig {
        GatewayConfig::new("gw_acacia", "acacia_pay")
            .with_merchant_id("M1001")
            .with_app_id("A2002")
            .with_api_key("super-secret")
            .with_endpoint_url("https://pay.example.com/api/pay/unifiedOrder")
            .with_webhook_url("https://merchant.example.com/notify")
    }

    #[test]
    fn test_field_adaptation() {
        let config = AcaciaConfig::from_gateway(&full_record());

        assert_eq!(config.merchant_no, "M1001");
        assert_eq!(config.app_id, "A2002");
        assert_eq!(config.private_key, "super-secret");
        assert_eq!(
            config.notify_url.as_deref(),
            Some("https://merchant.example.com/notify")
        );
    }

    #[test]
    fn test_valid_config_passes() {
        let report = AcaciaConfig::from_gateway(&full_record()).validate();
        assert!(report.is_valid);
    }

    #[test]
    fn test_merchant_pattern() {
        assert!(merchant_no_is_valid("M1"));
        assert!(merchant_no_is_valid("M1688888888888"));
        assert!(!merchant_no_is_valid("M"));
        assert!(!merchant_no_is_valid("X1001"));
        assert!(!merchant_no_is_valid("M10a1"));
        assert!(!merchant_no_is_valid(""));
    }

    #[test]
    fn test_missing_fields_are_reported_not_thrown() {
        let mut record = full_record();
        record.app_id = None;

        let report = AcaciaConfig::from_gateway(&record).validate();
        assert!(!report.is_valid);
        assert!(report.error.unwrap().contains("app_id"));

        let bare = GatewayConfig::new("gw", "acacia_pay");
        let report = AcaciaConfig::from_gateway(&bare).validate();
        assert!(!report.is_valid);
    }
}
