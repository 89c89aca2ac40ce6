//! Analytics: dashboard reads and event tracking writes.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use serde_json::Value;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::cors::{self, PUBLIC_CORS};
use crate::proxy::target::pick_params;
use crate::proxy::translate::ResourceSchema;

// Dashboard reads need the session cookie, so they are same-origin only
// and carry no CORS headers; only the public tracking write does.
static SUMMARY: ResourceSchema = ResourceSchema::new("analytics_summary")
    .gated()
    .arrays(&["pageViews", "topArticles"])
    .objects(&["totals"]);

static TRACK: ResourceSchema = ResourceSchema::new("analytics_track").with_cors(&PUBLIC_CORS);

/// GET /api/analytics — aggregated dashboard numbers (editors only).
pub async fn summary(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let query = pick_params(&params, &["range", "days", "endpoint"]);
    proxy::run(
        &state,
        &SUMMARY,
        Method::GET,
        &["api", "analytics"],
        query,
        &headers,
        None,
    )
    .await
}

/// POST /api/analytics — record a page-view or interaction event.
pub async fn track(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let body = serde_json::from_slice::<Value>(&body).ok();
    proxy::run(
        &state,
        &TRACK,
        Method::POST,
        &["api", "analytics"],
        vec![],
        &headers,
        body,
    )
    .await
}

/// OPTIONS /api/analytics — preflight.
pub async fn preflight() -> Response {
    cors::preflight(&PUBLIC_CORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gated_summary_is_same_origin_only() {
        assert!(SUMMARY.session_gated);
        assert!(SUMMARY.cors.is_none());
    }

    #[test]
    fn test_public_tracking_allows_cross_origin() {
        assert!(!TRACK.session_gated);
        assert!(TRACK.cors.is_some());
    }
}
