//! # gateway-rs
//!
//! Payment-gateway abstraction service.
//!
//! ## Usage
//!
//! ```bash
//! # Configure gateways in config/gateways.toml, then:
//! gateway-rs
//! ```

use gateway_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Gateways configured: {}", state.registry.len());
    info!(
        "Supported providers: {:?}",
        gateway_providers::supported_providers()
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("gateway-rs starting on http://{}", addr);

    if !is_prod {
        info!("Providers: GET http://{}/api/v1/providers", addr);
        info!("Validate:  POST http://{}/api/v1/gateways/{{id}}/validate", addr);
        info!("Test:      POST http://{}/api/v1/gateways/{{id}}/test", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
