//! # Application State
//!
//! Shared state for the Axum dispatch service: service configuration from
//! the environment and the gateway-record store loaded from
//! `config/gateways.toml`. The core never queries storage itself; handlers
//! fetch a record here and hand it to the provider factory by value.

use gateway_core::GatewayConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::Arc;

/// Service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// In-memory store of configured gateways, keyed by record id
#[derive(Debug, Clone, Default)]
pub struct GatewayRegistry {
    records: HashMap<String, GatewayConfig>,
}

/// On-disk shape of `config/gateways.toml`
#[derive(Debug, Deserialize)]
struct GatewayFile {
    #[serde(default)]
    gateways: Vec<GatewayConfig>,
}

impl GatewayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a registry from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let file: GatewayFile = toml::from_str(content)?;
        let mut registry = Self::new();
        for record in file.gateways {
            registry.insert(record);
        }
        Ok(registry)
    }

    pub fn insert(&mut self, record: GatewayConfig) {
        self.records.insert(record.id.clone(), record);
    }

    pub fn get(&self, id: &str) -> Option<&GatewayConfig> {
        self.records.get(id)
    }

    /// All records, credential material redacted, sorted by id
    pub fn list_redacted(&self) -> Vec<GatewayConfig> {
        let mut records: Vec<GatewayConfig> =
            self.records.values().map(|r| r.redacted()).collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configured gateway records
    pub registry: Arc<GatewayRegistry>,
    /// Service config
    pub config: AppConfig,
}

impl AppState {
    /// Load config from the environment and gateway records from disk
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let registry = load_gateway_registry()?;

        Ok(Self {
            registry: Arc::new(registry),
            config,
        })
    }

    /// State with an explicit registry (used by tests)
    pub fn with_registry(registry: GatewayRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
            },
        }
    }
}

/// Load gateway records from config file
fn load_gateway_registry() -> anyhow::Result<GatewayRegistry> {
    let config_paths = [
        "config/gateways.toml",
        "../config/gateways.toml",
        "../../config/gateways.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let registry = GatewayRegistry::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} gateways from {}", registry.len(), path);
            return Ok(registry);
        }
    }

    tracing::warn!("No gateway config found, starting with an empty registry");
    Ok(GatewayRegistry::new())
}
