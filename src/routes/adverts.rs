//! Advert slot fetch with graceful degradation.
//!
//! Ads must never break a page: any failure — unreachable backend, upstream
//! error status, malformed body — collapses to a 200 envelope with empty
//! slots so the page renders without ads.

use std::time::Instant;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy;
use crate::proxy::cache::CachePolicy;
use crate::proxy::translate::{self, ResourceSchema};

static ADVERTS: ResourceSchema = ResourceSchema::new("adverts")
    .arrays(&["topAds", "sideAds", "inlineAds"]);

fn no_ads() -> Value {
    json!({
        "success": true,
        "topAds": [],
        "sideAds": [],
        "inlineAds": [],
        "totalAds": 0,
        "message": "No ads available",
    })
}

/// POST /api/adverts — fetch the ad set for a page.
pub async fn fetch(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let start = Instant::now();
    let id = proxy::request_id(&headers);
    let body = serde_json::from_slice::<Value>(&body).ok();

    let outcome = proxy::forward(
        &state,
        &id,
        Method::POST,
        &["api", "adverts"],
        vec![],
        &headers,
        body,
    )
    .await;

    let response = match outcome {
        Ok(backend) if backend.is_well_formed() => {
            translate::respond(Ok(backend), &ADVERTS, &state.config)
        }
        Ok(backend) => {
            tracing::debug!(
                request_id = %id,
                upstream_status = %backend.status,
                "Advert fetch degraded to empty slots"
            );
            translate::build(
                StatusCode::OK,
                no_ads(),
                &ADVERTS,
                CachePolicy::NoStore,
                &backend.set_cookie,
            )
        }
        Err(err) => {
            tracing::debug!(
                request_id = %id,
                error = %err,
                "Advert fetch degraded to empty slots"
            );
            translate::build(StatusCode::OK, no_ads(), &ADVERTS, CachePolicy::NoStore, &[])
        }
    };

    metrics::record_request(ADVERTS.resource, response.status().as_u16(), start);
    response
}
