//! Backend-proxy translation contract.
//!
//! # Data Flow
//! ```text
//! Inbound request (method, path, query, headers, body)
//!     → target.rs (resolve backend URL, encode segments)
//!     → headers.rs (project allow-listed header set)
//!     → invoke.rs (forward with timeout, classify failure)
//!     → translate.rs (schema defaults, auth mapping, Set-Cookie relay)
//!     → Outbound response ({success: bool, ...} envelope)
//! ```
//!
//! # Design Decisions
//! - One shared pipeline; handlers only declare their `ResourceSchema`,
//!   path, and query selection
//! - A request ID flows from the inbound request (or is generated) to the
//!   backend and into every log line
//! - Handlers that deviate from the contract (search short-circuit, advert
//!   degradation, logout cookie clearing, home fan-out) compose the same
//!   pieces instead of bypassing them

pub mod cache;
pub mod cors;
pub mod headers;
pub mod invoke;
pub mod target;
pub mod translate;

use std::time::{Duration, Instant};

use axum::http::{HeaderMap, HeaderValue, Method};
use axum::response::Response;
use serde_json::Value;
use uuid::Uuid;

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy::invoke::BackendResponse;
use crate::proxy::translate::ResourceSchema;

/// Correlation ID for one proxied request: reuse the browser's when present,
/// otherwise mint a UUID.
pub fn request_id(inbound: &HeaderMap) -> String {
    inbound
        .get(headers::X_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Forward one request through the full contract and translate the result.
///
/// This is the whole handler body for resources with no special cases.
pub async fn run(
    state: &AppState,
    schema: &'static ResourceSchema,
    method: Method,
    segments: &[&str],
    query: Vec<(&'static str, String)>,
    inbound: &HeaderMap,
    body: Option<Value>,
) -> Response {
    let start = Instant::now();
    let id = request_id(inbound);

    let outcome = forward(state, &id, method, segments, query, inbound, body).await;
    let response = translate::respond(outcome, schema, &state.config);

    metrics::record_request(schema.resource, response.status().as_u16(), start);
    tracing::debug!(
        request_id = %id,
        resource = %schema.resource,
        status = %response.status(),
        "Proxied request"
    );
    response
}

/// Resolve, project, and invoke; no translation. Used directly by handlers
/// that need the raw backend outcome (adverts degradation, home fan-out).
pub async fn forward(
    state: &AppState,
    request_id: &str,
    method: Method,
    segments: &[&str],
    query: Vec<(&'static str, String)>,
    inbound: &HeaderMap,
    body: Option<Value>,
) -> Result<BackendResponse, GatewayError> {
    let url = target::resolve(&state.config.backend.base_url, segments, &query)?;

    let mut outbound = headers::project(inbound);
    if let Ok(value) = HeaderValue::from_str(request_id) {
        outbound.insert(headers::X_REQUEST_ID, value);
    }

    invoke::forward(
        &state.client,
        method,
        url,
        outbound,
        body,
        Duration::from_secs(state.config.backend.timeout_secs),
    )
    .await
}
