//! Outbound backend invocation.
//!
//! # Responsibilities
//! - Issue the forwarded request with an explicit per-request timeout
//! - Classify failures: unreachable backend vs. upstream error status vs.
//!   malformed body
//! - Capture Set-Cookie headers before the body is consumed
//!
//! # Design Decisions
//! - Bodies are buffered, not streamed: every response is JSON small enough
//!   to reshape in memory
//! - A non-2xx status is not an error here; the translator relays it along
//!   with the backend's own error envelope when the body parses
//! - Cancellation is timeout-only; there are no retries

use std::time::Duration;

use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::Value;
use url::Url;

use crate::error::GatewayError;

/// What came back from the backend, decoupled from the transport.
#[derive(Debug)]
pub struct BackendResponse {
    pub status: StatusCode,
    /// Parsed JSON body; `None` when the body was not valid JSON.
    pub body: Option<Value>,
    /// Set-Cookie headers, preserved byte-for-byte for relay.
    pub set_cookie: Vec<HeaderValue>,
}

impl BackendResponse {
    /// True when the status is 2xx and the body parsed as a JSON object.
    pub fn is_well_formed(&self) -> bool {
        self.status.is_success() && matches!(self.body, Some(Value::Object(_)))
    }
}

/// Forward a request to the backend and classify the outcome.
///
/// `headers` must already be the projected allow-listed set. A JSON `body`
/// implies `Content-Type: application/json` on the wire.
pub async fn forward(
    client: &reqwest::Client,
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Value>,
    timeout: Duration,
) -> Result<BackendResponse, GatewayError> {
    let mut request = client
        .request(method, url)
        .timeout(timeout)
        .headers(headers);

    if let Some(body) = body {
        request = request.json(&body);
    }

    let response = request
        .send()
        .await
        .map_err(GatewayError::BackendUnreachable)?;

    let status = response.status();

    let set_cookie: Vec<HeaderValue> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .cloned()
        .collect();

    let bytes = response.bytes().await.map_err(|_| GatewayError::MalformedBody)?;
    let body = serde_json::from_slice::<Value>(&bytes).ok();

    Ok(BackendResponse {
        status,
        body,
        set_cookie,
    })
}
