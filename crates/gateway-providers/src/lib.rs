//! # gateway-providers
//!
//! Backend provider variants and the provider factory for gateway-rs.
//!
//! - `factory::create_provider` maps a gateway record to a concrete
//!   `PaymentProvider` by its backend-kind discriminator
//! - `StripeProvider` / `PaypalProvider` — placeholder card-processor
//!   backends (credential checks and method lists are real, payments are
//!   synthetic)
//! - `PluginProvider` — precompiled plugin variant backed by a process-wide
//!   registry
//! - the Acacia unified-order variant comes from the `gateway-acacia` crate

pub mod factory;
pub mod paypal;
pub mod plugin;
pub mod stripe;

// Re-exports
pub use factory::{create_provider, supported_providers, SUPPORTED_PROVIDERS};
pub use paypal::PaypalProvider;
pub use plugin::{register_plugin, resolve_plugin, PluginHooks, PluginProvider};
pub use stripe::StripeProvider;

use chrono::Utc;
use rand::Rng;

/// Synthetic transaction id for the placeholder backends:
/// `<prefix>_<millis><4 random hex>`.
pub(crate) fn synthetic_transaction_id(prefix: &str) -> String {
    let salt: u16 = rand::thread_rng().gen();
    format!("{}_{}{:04x}", prefix, Utc::now().timestamp_millis(), salt)
}
