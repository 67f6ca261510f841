//! # Remote Gateway Client
//!
//! Submits a signed parameter set to the Acacia unified-order endpoint and
//! maps the response envelope to a normalized outcome. One POST per attempt,
//! no retries; trust is established entirely by the embedded signature, so no
//! authentication header is sent.

use crate::signer::ParamMap;
use gateway_core::{PaymentError, PaymentOutcome, PaymentResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error, instrument};

/// HTTP client for the unified-order endpoint
pub struct AcaciaClient {
    endpoint_url: String,
    client: Client,
}

impl AcaciaClient {
    /// Create a client for a fixed endpoint URL
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint_url: endpoint_url.into(),
            client,
        }
    }

    /// Submit a signed parameter set.
    ///
    /// Every failure mode — network, non-2xx transport, malformed body,
    /// nonzero business code — converts to `PaymentOutcome::Failure` here;
    /// nothing propagates to the caller as an error.
    #[instrument(skip(self, params), fields(endpoint = %self.endpoint_url))]
    pub async fn submit(&self, params: &ParamMap) -> PaymentOutcome {
        match self.submit_inner(params).await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!("Unified-order submission failed: {}", err);
                err.into()
            }
        }
    }

    async fn submit_inner(&self, params: &ParamMap) -> PaymentResult<PaymentOutcome> {
        debug!("Submitting unified order: {} fields", params.len());

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(params)
            .send()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            error!("Gateway transport error: status={}, body={}", status, body);
            return Err(PaymentError::NetworkError(format!(
                "gateway returned HTTP {}: {}",
                status, body
            )));
        }

        let envelope: GatewayEnvelope = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("failed to parse gateway response: {}", e))
        })?;

        if envelope.code != 0 {
            debug!(
                "Gateway business failure: code={}, msg={}",
                envelope.code, envelope.msg
            );
            return Ok(PaymentOutcome::failure_with_code(envelope.msg, envelope.code));
        }

        let payload = envelope.data.ok_or_else(|| {
            PaymentError::Serialization("gateway success response carried no data".to_string())
        })?;

        Ok(PaymentOutcome::Success {
            transaction_id: payload.pay_order_id,
            payment_url: payload.pay_data,
            order_no: payload.mch_order_no,
            order_state: payload.order_state.map(render_order_state),
        })
    }
}

/// Response envelope: `code` 0 means success, anything else is a business
/// failure whose `msg` and code pass through verbatim.
#[derive(Debug, Deserialize)]
struct GatewayEnvelope {
    code: i64,
    #[serde(default)]
    msg: String,
    #[serde(default)]
    data: Option<GatewayPayload>,
}

#[derive(Debug, Deserialize)]
struct GatewayPayload {
    #[serde(rename = "payOrderId")]
    pay_order_id: String,
    #[serde(rename = "mchOrderNo", default)]
    mch_order_no: Option<String>,
    #[serde(rename = "payData", default)]
    pay_data: Option<String>,
    // The gateway sends this as either a string or a number
    #[serde(rename = "orderState", default)]
    order_state: Option<Value>,
}

fn render_order_state(state: Value) -> String {
    match state {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_params() -> ParamMap {
        let mut params = ParamMap::new();
        params.insert("mchNo".into(), json!("M1"));
        params.insert("totalAmount".into(), json!(100));
        params.insert("sign".into(), json!("ABCD"));
        params
    }

    #[tokio::test]
    async fn test_success_envelope_maps_to_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/pay/unifiedOrder"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0,
                "msg": "SUCCESS",
                "data": {
                    "payOrderId": "P2024123100001",
                    "mchOrderNo": "M1700000000000abc123",
                    "payData": "https://pay.example.com/cashier?token=t1",
                    "orderState": 1
                }
            })))
            .mount(&server)
            .await;

        let client = AcaciaClient::new(format!("{}/api/pay/unifiedOrder", server.uri()));
        let outcome = client.submit(&signed_params()).await;

        assert_eq!(
            outcome,
            PaymentOutcome::Success {
                transaction_id: "P2024123100001".into(),
                payment_url: Some("https://pay.example.com/cashier?token=t1".into()),
                order_no: Some("M1700000000000abc123".into()),
                order_state: Some("1".into()),
            }
        );
    }

    #[tokio::test]
    async fn test_business_failure_carries_msg_and_code() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 1,
                "msg": "insufficient balance"
            })))
            .mount(&server)
            .await;

        let client = AcaciaClient::new(server.uri());
        let outcome = client.submit(&signed_params()).await;

        assert_eq!(
            outcome,
            PaymentOutcome::failure_with_code("insufficient balance", 1)
        );
    }

    #[tokio::test]
    async fn test_non_2xx_captures_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .mount(&server)
            .await;

        let client = AcaciaClient::new(server.uri());
        let outcome = client.submit(&signed_params()).await;

        match outcome {
            PaymentOutcome::Failure { error, code } => {
                assert!(error.contains("502"));
                assert!(error.contains("bad gateway"));
                assert_eq!(code, None);
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_failure_not_a_panic() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = AcaciaClient::new(server.uri());
        assert!(!client.submit(&signed_params()).await.is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_failure() {
        // Nothing listening on this port
        let client = AcaciaClient::new("http://127.0.0.1:1/api/pay/unifiedOrder");
        assert!(!client.submit(&signed_params()).await.is_success());
    }

    #[tokio::test]
    async fn test_request_body_is_the_signed_parameter_set() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_json_string(
                r#"{"mchNo":"M1","sign":"ABCD","totalAmount":100}"#,
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": 0,
                "msg": "SUCCESS",
                "data": { "payOrderId": "P1" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AcaciaClient::new(server.uri());
        assert!(client.submit(&signed_params()).await.is_success());
    }
}
