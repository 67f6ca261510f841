//! # gateway-api
//!
//! HTTP dispatch layer for gateway-rs: thin handlers that fetch a gateway
//! record from the registry, obtain a provider through the factory, and
//! invoke its operations. The core is invoked from here; it never reaches
//! back into this layer.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, GatewayRegistry};
