//! Article search.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;
use serde_json::json;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::cache::CachePolicy;
use crate::proxy::target::pick_params;
use crate::proxy::translate::{self, ResourceSchema};

static SEARCH: ResourceSchema = ResourceSchema::new("search")
    .arrays(&["results"])
    .paginated();

/// GET /api/search — full-text article search.
///
/// An empty or absent `q` short-circuits to an empty result envelope
/// without contacting the backend.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let term = params.get("q").map(String::as_str).unwrap_or("");
    if term.trim().is_empty() {
        let body = json!({
            "success": true,
            "results": [],
            "total": 0,
            "query": "",
        });
        return translate::build(StatusCode::OK, body, &SEARCH, CachePolicy::NoStore, &[]);
    }

    let query = pick_params(&params, &["q", "page", "limit", "type", "sort", "categories"]);
    proxy::run(
        &state,
        &SEARCH,
        Method::GET,
        &["api", "search"],
        query,
        &headers,
        None,
    )
    .await
}
