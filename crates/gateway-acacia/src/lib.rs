//! # gateway-acacia
//!
//! Acacia Pay unified-order integration for gateway-rs.
//!
//! The integration has three layers, leaves first:
//!
//! 1. **`signer`** — deterministic parameter canonicalization and the
//!    MD5-over-`key=<secret>` signature protocol the remote verifier expects.
//! 2. **`order`** — unified-order parameter assembly, amount-range
//!    validation, order-number synthesis.
//! 3. **`client`** — one signed POST per attempt, envelope parsing,
//!    normalized outcome mapping.
//!
//! `AcaciaPayProvider` ties them together behind the `PaymentProvider` trait.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gateway_acacia::AcaciaPayProvider;
//! use gateway_core::{GatewayConfig, PaymentProvider};
//!
//! let record = GatewayConfig::new("gw_1", "acacia_pay")
//!     .with_merchant_id("M1001")
//!     .with_app_id("A1")
//!     .with_api_key("signing-secret")
//!     .with_endpoint_url("https://pay.example.com/api/pay/unifiedOrder");
//!
//! let provider = AcaciaPayProvider::new(&record);
//! let outcome = provider.process_payment(25.00, "USD").await;
//! ```

pub mod client;
pub mod config;
pub mod order;
pub mod provider;
pub mod signer;

// Re-exports
pub use client::AcaciaClient;
pub use config::AcaciaConfig;
pub use order::{build_order, generate_order_no, BuiltOrder, OrderOptions};
pub use provider::AcaciaPayProvider;
pub use signer::{canonicalize, sign, verify, ParamMap, SIGN_FIELD};
