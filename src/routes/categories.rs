//! Footer category navigation.

use std::collections::HashMap;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::target::pick_params;
use crate::proxy::translate::ResourceSchema;

static CATEGORIES: ResourceSchema = ResourceSchema::new("categories")
    .arrays(&["categories"])
    .cached(600, 120);

/// GET /api/categories — category list for the site footer. Changes rarely;
/// cacheable for ten minutes.
pub async fn footer(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let query = pick_params(&params, &["limit", "slug"]);
    proxy::run(
        &state,
        &CATEGORIES,
        Method::GET,
        &["api", "categories"],
        query,
        &headers,
        None,
    )
    .await
}
