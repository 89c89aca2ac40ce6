//! Quote endpoints: the pull-quote rail on article pages.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::cors::{self, PUBLIC_CORS};
use crate::proxy::target::pick_params;
use crate::proxy::translate::{self, ResourceSchema};

static QUOTES: ResourceSchema = ResourceSchema::new("quotes")
    .arrays(&["quotes", "strikingQuotes", "trendingQuotes"])
    .cached(300, 60)
    .with_cors(&PUBLIC_CORS);

// Deletion needs the session cookie, so it is same-origin only and the
// schema carries no CORS headers.
static QUOTE_DELETE: ResourceSchema = ResourceSchema::new("quote_delete").gated();

/// GET /api/quotes — current, striking, and trending quotes. Semi-static;
/// cacheable for five minutes.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let query = pick_params(&params, &["limit", "type"]);
    proxy::run(
        &state,
        &QUOTES,
        Method::GET,
        &["api", "quotes"],
        query,
        &headers,
        None,
    )
    .await
}

/// DELETE /api/quotes?quote_id=… — remove a quote (editorial action).
///
/// A missing ID is a client error answered locally; the backend is never
/// contacted.
pub async fn remove(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let quote_id = match params.get("quote_id").filter(|id| !id.is_empty()) {
        Some(id) => id.clone(),
        None => {
            return translate::failure(
                &GatewayError::MissingParameter("Quote ID is required"),
                &QUOTE_DELETE,
                &state.config,
            );
        }
    };

    proxy::run(
        &state,
        &QUOTE_DELETE,
        Method::DELETE,
        &["api", "quotes", quote_id.as_str()],
        vec![],
        &headers,
        None,
    )
    .await
}

/// OPTIONS /api/quotes — preflight for cross-origin reads.
pub async fn preflight() -> Response {
    cors::preflight(&PUBLIC_CORS)
}
