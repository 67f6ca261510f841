//! # Plugin Provider
//!
//! Backend variant whose behavior comes from a precompiled plugin rather
//! than built-in code. Plugins implement `PluginHooks`, are compiled and
//! linked ahead of time, and are registered in a process-wide registry keyed
//! by name; a gateway record selects one with its `plugin` field. No
//! configuration-supplied text is ever evaluated as code.
//!
//! An unresolved plugin name leaves the hook set unset: construction still
//! succeeds, but `process_payment` and `validate_config` report "not
//! implemented" and `payment_methods` returns an empty list.

use async_trait::async_trait;
use gateway_core::{GatewayConfig, PaymentOutcome, PaymentProvider, ValidationReport};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};
use tracing::{instrument, warn};

/// Operations a plugin may implement. Every operation has a default that
/// reports "not implemented", so a plugin overrides only what it supports.
#[async_trait]
pub trait PluginHooks: Send + Sync {
    async fn process_payment(&self, _amount: f64, _currency: &str) -> PaymentOutcome {
        PaymentOutcome::failure("process_payment not implemented by plugin")
    }

    fn validate_config(&self) -> ValidationReport {
        ValidationReport::invalid("validate_config not implemented by plugin")
    }

    fn payment_methods(&self) -> Vec<String> {
        Vec::new()
    }
}

fn registry() -> &'static RwLock<HashMap<String, Arc<dyn PluginHooks>>> {
    static REGISTRY: OnceLock<RwLock<HashMap<String, Arc<dyn PluginHooks>>>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Register a precompiled plugin under a name. Later registrations under the
/// same name replace earlier ones.
pub fn register_plugin(name: impl Into<String>, hooks: Arc<dyn PluginHooks>) {
    registry()
        .write()
        .expect("plugin registry poisoned")
        .insert(name.into(), hooks);
}

/// Look up a registered plugin by name.
pub fn resolve_plugin(name: &str) -> Option<Arc<dyn PluginHooks>> {
    registry()
        .read()
        .expect("plugin registry poisoned")
        .get(name)
        .cloned()
}

/// Plugin-backed provider variant
pub struct PluginProvider {
    hooks: Option<Arc<dyn PluginHooks>>,
    plugin_name: String,
}

impl PluginProvider {
    /// Resolve the record's plugin name against the registry. An unknown or
    /// missing name is not an error here; the provider degrades to
    /// "not implemented" on every operation.
    pub fn new(record: &GatewayConfig) -> Self {
        let plugin_name = record.plugin.clone().unwrap_or_default();
        let hooks = if plugin_name.is_empty() {
            None
        } else {
            resolve_plugin(&plugin_name)
        };

        if hooks.is_none() {
            warn!(
                "Plugin '{}' not registered; provider will report not-implemented",
                plugin_name
            );
        }

        Self { hooks, plugin_name }
    }

    /// Construct with explicit hooks, bypassing the registry (used by tests)
    pub fn with_hooks(plugin_name: impl Into<String>, hooks: Arc<dyn PluginHooks>) -> Self {
        Self {
            hooks: Some(hooks),
            plugin_name: plugin_name.into(),
        }
    }
}

#[async_trait]
impl PaymentProvider for PluginProvider {
    #[instrument(skip(self), fields(provider = "plugin", plugin = %self.plugin_name))]
    async fn process_payment(&self, amount: f64, currency: &str) -> PaymentOutcome {
        match &self.hooks {
            Some(hooks) => hooks.process_payment(amount, currency).await,
            None => PaymentOutcome::failure(format!(
                "plugin '{}' is not available: process_payment not implemented",
                self.plugin_name
            )),
        }
    }

    fn validate_config(&self) -> ValidationReport {
        match &self.hooks {
            Some(hooks) => hooks.validate_config(),
            None => ValidationReport::invalid(format!(
                "plugin '{}' is not available: validate_config not implemented",
                self.plugin_name
            )),
        }
    }

    fn payment_methods(&self) -> Vec<String> {
        match &self.hooks {
            Some(hooks) => hooks.payment_methods(),
            None => Vec::new(),
        }
    }

    fn provider_name(&self) -> &'static str {
        "plugin"
    }
}
