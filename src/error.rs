//! Gateway error taxonomy.
//!
//! Every failure a handler can hit maps to one of these variants, and every
//! variant maps to an HTTP status plus a well-formed JSON envelope. No error
//! leaves a handler unformatted: the browser always receives a body with a
//! boolean `success` field.

use axum::http::StatusCode;
use serde_json::{json, Value};

/// Failure classes for a proxied request.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Backend unreachable: DNS failure, connection refused, or timeout.
    #[error("backend unreachable: {0}")]
    BackendUnreachable(#[source] reqwest::Error),

    /// Backend answered 2xx but the body was not valid JSON (or not an
    /// object at all).
    #[error("malformed backend response body")]
    MalformedBody,

    /// Required client input missing; the backend is never contacted.
    #[error("{0}")]
    MissingParameter(&'static str),

    /// Anything else that should never happen in steady state.
    #[error("internal gateway error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Outbound HTTP status for this failure class.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::BackendUnreachable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GatewayError::MalformedBody => StatusCode::BAD_GATEWAY,
            GatewayError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message. Generic for backend failures; the literal
    /// parameter message for client input errors.
    pub fn message(&self) -> &str {
        match self {
            GatewayError::BackendUnreachable(_) => "News service is temporarily unavailable",
            GatewayError::MalformedBody => "Invalid response from news service",
            GatewayError::MissingParameter(msg) => msg,
            GatewayError::Internal(_) => "Internal server error",
        }
    }

    /// Build the JSON error envelope. Backend error detail is attached only
    /// when `include_detail` is set (development deployments).
    pub fn envelope(&self, include_detail: bool) -> Value {
        let mut body = json!({
            "success": false,
            "message": self.message(),
        });
        if include_detail {
            body["error"] = Value::String(self.to_string());
        }
        body
    }
}

impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::Internal(format!("bad target url: {err}"))
    }
}
