//! Backup and restore trigger.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method};
use axum::response::Response;
use serde_json::Value;

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::cors::{self, PUBLIC_CORS};
use crate::proxy::translate::{self, ResourceSchema};

static BACKUP: ResourceSchema = ResourceSchema::new("backup")
    .gated()
    .with_cors(&PUBLIC_CORS);

/// POST /api/backup?action=backup|restore — kick off a backup or restore.
pub async fn run(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let action = match params.get("action").filter(|a| !a.is_empty()) {
        Some(action) => action.clone(),
        None => {
            return translate::failure(
                &GatewayError::MissingParameter("Backup action is required"),
                &BACKUP,
                &state.config,
            );
        }
    };

    let body = serde_json::from_slice::<Value>(&body).ok();
    proxy::run(
        &state,
        &BACKUP,
        Method::POST,
        &["api", "backup"],
        vec![("action", action)],
        &headers,
        body,
    )
    .await
}

/// OPTIONS /api/backup — preflight.
pub async fn preflight() -> Response {
    cors::preflight(&PUBLIC_CORS)
}
