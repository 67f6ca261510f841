//! # Request Handlers
//!
//! Axum handlers for the dispatch layer. Three entry points invoke the core:
//! list a gateway's payment methods, validate its configuration, and run an
//! end-to-end connectivity test (validate, then a minimal real payment).

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use gateway_core::{
    BoxedPaymentProvider, GatewayConfig, PaymentError, PaymentOutcome, ValidationReport,
};
use serde::Serialize;
use tracing::{error, info, instrument};

/// Smallest amount the unified-order gateway accepts, used for the
/// connectivity test so a live run costs as little as possible.
const TEST_AMOUNT: f64 = 5.00;
const TEST_CURRENCY: &str = "USD";

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

/// Supported backend kinds
#[derive(Debug, Serialize)]
pub struct ProvidersResponse {
    pub providers: &'static [&'static str],
}

/// A gateway's payment methods
#[derive(Debug, Serialize)]
pub struct MethodsResponse {
    pub gateway_id: String,
    pub provider: String,
    pub methods: Vec<String>,
}

/// Connectivity test report: configuration validity plus the outcome of a
/// minimal real payment attempt (attempted only when validation passes)
#[derive(Debug, Serialize)]
pub struct TestReport {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<PaymentOutcome>,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn payment_error_to_response(err: PaymentError) -> HandlerError {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

fn gateway_not_found(id: &str) -> HandlerError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(format!("Gateway not found: {}", id), 404)),
    )
}

/// Fetch a record and construct its provider
fn provider_for(
    state: &AppState,
    id: &str,
) -> Result<(GatewayConfig, BoxedPaymentProvider), HandlerError> {
    let record = state.registry.get(id).ok_or_else(|| gateway_not_found(id))?;
    let provider = gateway_providers::create_provider(record).map_err(|e| {
        error!("Failed to construct provider for {}: {}", id, e);
        payment_error_to_response(e)
    })?;
    Ok((record.clone(), provider))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "gateway-rs",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List the backend kinds the factory supports
pub async fn list_providers() -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: gateway_providers::supported_providers(),
    })
}

/// List configured gateways, credentials redacted
pub async fn list_gateways(State(state): State<AppState>) -> Json<Vec<GatewayConfig>> {
    Json(state.registry.list_redacted())
}

/// Payment methods for one configured gateway
#[instrument(skip(state))]
pub async fn gateway_methods(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MethodsResponse>, HandlerError> {
    let (record, provider) = provider_for(&state, &id)?;

    Ok(Json(MethodsResponse {
        gateway_id: id,
        provider: record.provider,
        methods: provider.payment_methods(),
    }))
}

/// Validate one configured gateway's credentials (local check, no network)
#[instrument(skip(state))]
pub async fn validate_gateway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ValidationReport>, HandlerError> {
    let (_, provider) = provider_for(&state, &id)?;

    let report = provider.validate_config();
    info!("Validated gateway {}: valid={}", id, report.is_valid);
    Ok(Json(report))
}

/// End-to-end connectivity test: validate, then attempt a minimal payment
#[instrument(skip(state))]
pub async fn test_gateway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TestReport>, HandlerError> {
    let (record, provider) = provider_for(&state, &id)?;

    if !record.is_active {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                format!("Gateway is not active: {}", id),
                400,
            )),
        ));
    }

    let report = provider.validate_config();
    if !report.is_valid {
        return Ok(Json(TestReport {
            is_valid: false,
            error: report.error,
            outcome: None,
        }));
    }

    let outcome = provider.process_payment(TEST_AMOUNT, TEST_CURRENCY).await;
    info!(
        "Connectivity test for {}: success={}",
        id,
        outcome.is_success()
    );

    Ok(Json(TestReport {
        is_valid: true,
        error: None,
        outcome: Some(outcome),
    }))
}
