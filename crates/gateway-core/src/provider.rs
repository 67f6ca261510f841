//! # Payment Provider Trait
//!
//! Core Strategy pattern trait for payment backends.
//! Implementations: Acacia Pay (unified-order gateway), Stripe, PayPal,
//! precompiled plugins.
//!
//! ## Design Pattern
//!
//! This uses the Strategy design pattern to allow swapping payment backends
//! at runtime without changing client code. Each backend implements the
//! `PaymentProvider` trait and is selected through the provider factory.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentProvider (trait)                   │
//! │  ├── process_payment()                                      │
//! │  ├── validate_config()                                      │
//! │  └── payment_methods()                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┬───────────────┐
//!          │                 │                 │               │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴──────┐ ┌──────┴───────┐
//!  │AcaciaPay      │ │StripeProvider │ │PaypalProvider│ │PluginProvider│
//!  │Provider       │ │   (stub)      │ │   (stub)     │ │              │
//!  └───────────────┘ └───────────────┘ └──────────────┘ └──────────────┘
//! ```

use crate::outcome::{PaymentOutcome, ValidationReport};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment backend implementations.
///
/// Every operation resolves to a structured result: a provider never lets an
/// internal error escape as a panic or a raw `Err` past this boundary.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Attempt a payment of `amount` major currency units.
    ///
    /// Validation failures, transport failures, and backend business
    /// failures all surface as `PaymentOutcome::Failure`.
    async fn process_payment(&self, amount: f64, currency: &str) -> PaymentOutcome;

    /// Check that the configured credentials are usable.
    ///
    /// This is a local shape check only; it performs no network call.
    fn validate_config(&self) -> ValidationReport;

    /// The payment method identifiers this backend supports.
    fn payment_methods(&self) -> Vec<String>;

    /// Backend-kind name (for logging and routing).
    fn provider_name(&self) -> &'static str;
}

impl std::fmt::Debug for dyn PaymentProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentProvider")
            .field("provider_name", &self.provider_name())
            .finish()
    }
}

/// Type alias for a shared payment provider (dynamic dispatch)
pub type BoxedPaymentProvider = Arc<dyn PaymentProvider>;
