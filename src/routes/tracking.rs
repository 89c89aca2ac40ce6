//! Cookie-consent tracking.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use serde_json::Value;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::translate::ResourceSchema;

static TRACKING: ResourceSchema = ResourceSchema::new("cookie_tracking");

/// POST /api/tracking/cookie — record the visitor's consent decision.
/// Client address headers go through the standard projection so the backend
/// sees the real origin IP.
pub async fn record(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let body = serde_json::from_slice::<Value>(&body).ok();
    proxy::run(
        &state,
        &TRACKING,
        Method::POST,
        &["api", "tracking", "cookie"],
        vec![],
        &headers,
        body,
    )
    .await
}
