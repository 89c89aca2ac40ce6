//! User role lookup.

use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::translate::ResourceSchema;

static ROLES: ResourceSchema = ResourceSchema::new("user_roles").gated().arrays(&["roles"]);

/// GET /api/users/roles — roles attached to the signed-in user.
pub async fn list(State(state): State<AppState>, headers: HeaderMap) -> Response {
    proxy::run(
        &state,
        &ROLES,
        Method::GET,
        &["api", "users", "roles"],
        vec![],
        &headers,
        None,
    )
    .await
}
