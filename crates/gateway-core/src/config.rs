//! # Gateway Configuration Records
//!
//! The configuration record the dispatch layer hands the core. The record is
//! a flat shape shared by every backend kind; each provider variant adapts
//! the generic credential fields to its own meaning at construction time
//! (e.g. the Acacia variant reads the signing secret out of `api_key`).
//!
//! Records are received by value and never mutated by the core.

use serde::{Deserialize, Serialize};

/// A configured payment gateway, as stored by the dispatch layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Stable identifier for this gateway record
    pub id: String,

    /// Display name for UI listings
    #[serde(default)]
    pub name: String,

    /// Backend-kind discriminator ("acacia_pay", "stripe", "paypal", "plugin")
    pub provider: String,

    /// Whether this gateway is currently enabled
    #[serde(default = "default_true")]
    pub is_active: bool,

    /// Whether this gateway runs against a sandbox/test backend
    #[serde(default)]
    pub is_test_mode: bool,

    /// Primary credential. Meaning varies per backend: Stripe secret key,
    /// PayPal client id, Acacia signing secret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Merchant identifier at the backend (Acacia mchNo)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    /// Application identifier at the backend (Acacia appId)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// Base URL of the backend's order-creation endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Asynchronous notification (webhook) callback URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,

    /// Name of a precompiled plugin, for the plugin backend kind
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
}

fn default_true() -> bool {
    true
}

impl GatewayConfig {
    /// Minimal record for a given backend kind (useful in tests)
    pub fn new(id: impl Into<String>, provider: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            provider: provider.into(),
            is_active: true,
            is_test_mode: false,
            api_key: None,
            merchant_id: None,
            app_id: None,
            endpoint_url: None,
            webhook_url: None,
            plugin: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_merchant_id(mut self, id: impl Into<String>) -> Self {
        self.merchant_id = Some(id.into());
        self
    }

    pub fn with_app_id(mut self, id: impl Into<String>) -> Self {
        self.app_id = Some(id.into());
        self
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.webhook_url = Some(url.into());
        self
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.is_test_mode = test_mode;
        self
    }

    /// Copy with credential material blanked out, for UI-facing listings
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.api_key.is_some() {
            copy.api_key = Some("***".to_string());
        }
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = GatewayConfig::new("gw_1", "stripe").with_api_key("sk_test_abc");

        assert!(config.is_active);
        assert!(!config.is_test_mode);
        assert_eq!(config.provider, "stripe");
        assert_eq!(config.api_key.as_deref(), Some("sk_test_abc"));
    }

    #[test]
    fn test_redacted_hides_api_key() {
        let config = GatewayConfig::new("gw_1", "stripe").with_api_key("sk_live_secret");
        let redacted = config.redacted();

        assert_eq!(redacted.api_key.as_deref(), Some("***"));
        // Original is untouched
        assert_eq!(config.api_key.as_deref(), Some("sk_live_secret"));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let config: GatewayConfig = serde_json::from_str(
            r#"{"id": "gw_1", "provider": "acacia_pay", "merchant_id": "M1001"}"#,
        )
        .unwrap();

        assert!(config.is_active);
        assert_eq!(config.merchant_id.as_deref(), Some("M1001"));
        assert!(config.api_key.is_none());
    }
}
