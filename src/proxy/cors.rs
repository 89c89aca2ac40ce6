//! CORS header sets and the preflight responder.
//!
//! Resources that browsers call cross-origin (analytics, quote deletion,
//! backup-restore) answer OPTIONS locally with the same CORS header set as
//! the real response. The preflight path is side-effect-free, requires no
//! authentication, and never contacts the backend.

use axum::body::Body;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;

/// Static CORS header set for one resource.
#[derive(Debug, Clone, Copy)]
pub struct CorsPolicy {
    pub allow_origin: &'static str,
    pub allow_methods: &'static str,
    pub allow_headers: &'static str,
    pub allow_credentials: bool,
}

/// Cross-origin policy for public write endpoints (analytics, adverts,
/// tracking). Credentials stay off with a wildcard origin.
pub const PUBLIC_CORS: CorsPolicy = CorsPolicy {
    allow_origin: "*",
    allow_methods: "GET, POST, DELETE, OPTIONS",
    allow_headers: "Content-Type, Authorization, X-CSRF-Token",
    allow_credentials: false,
};

impl CorsPolicy {
    /// Write this policy's header set into `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) {
        headers.insert(
            "access-control-allow-origin",
            HeaderValue::from_static(self.allow_origin),
        );
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static(self.allow_methods),
        );
        headers.insert(
            "access-control-allow-headers",
            HeaderValue::from_static(self.allow_headers),
        );
        if self.allow_credentials {
            headers.insert(
                "access-control-allow-credentials",
                HeaderValue::from_static("true"),
            );
        }
    }
}

/// Answer an OPTIONS preflight with 200 and the resource's CORS header set.
pub fn preflight(policy: &CorsPolicy) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = StatusCode::OK;
    policy.apply(response.headers_mut());
    response
        .headers_mut()
        .insert("access-control-max-age", HeaderValue::from_static("86400"));
    response
}
