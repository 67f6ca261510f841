//! # gateway-core
//!
//! Core types and traits for the gateway-rs payment abstraction layer.
//!
//! This crate provides:
//! - `PaymentProvider` trait implemented by every backend variant
//! - `PaymentOutcome` and `ValidationReport`, the normalized result shapes
//! - `GatewayConfig`, the configuration record the dispatch layer supplies
//! - `PaymentError` for typed error handling inside the core
//!
//! ## Example
//!
//! ```rust,ignore
//! use gateway_core::{GatewayConfig, PaymentProvider};
//!
//! let config = GatewayConfig::new("gw_1", "stripe").with_api_key("sk_test_abc");
//! let provider = gateway_providers::create_provider(&config)?;
//!
//! let outcome = provider.process_payment(25.00, "USD").await;
//! if outcome.is_success() {
//!     // hand the payment URL to the customer
//! }
//! ```

pub mod config;
pub mod error;
pub mod outcome;
pub mod provider;

// Re-exports for convenience
pub use config::GatewayConfig;
pub use error::{PaymentError, PaymentResult};
pub use outcome::{PaymentOutcome, ValidationReport};
pub use provider::{BoxedPaymentProvider, PaymentProvider};
