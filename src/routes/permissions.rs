//! Editorial permission lookup.

use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::translate::ResourceSchema;

static PERMISSIONS: ResourceSchema = ResourceSchema::new("permissions")
    .gated()
    .arrays(&["permissions"]);

/// GET /api/permissions — the signed-in user's editorial permissions.
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    proxy::run(
        &state,
        &PERMISSIONS,
        Method::GET,
        &["api", "permissions"],
        vec![],
        &headers,
        None,
    )
    .await
}
