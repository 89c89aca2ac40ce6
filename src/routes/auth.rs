//! Session endpoints: check and logout.

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method};
use axum::response::Response;

use crate::http::server::AppState;
use crate::proxy;
use crate::proxy::translate::ResourceSchema;

static SESSION: ResourceSchema = ResourceSchema::new("auth_session").gated();
static LOGOUT: ResourceSchema = ResourceSchema::new("auth_logout").gated();

/// GET /api/auth/session — is the browser's session still valid?
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> Response {
    proxy::run(
        &state,
        &SESSION,
        Method::GET,
        &["api", "auth", "session"],
        vec![],
        &headers,
        None,
    )
    .await
}

/// POST /api/auth/logout — end the session upstream and expire the session
/// cookie client-side.
///
/// The cookie is cleared even when the backend call fails: the browser's
/// session must die regardless of upstream health.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let mut response = proxy::run(
        &state,
        &LOGOUT,
        Method::POST,
        &["api", "auth", "logout"],
        vec![],
        &headers,
        None,
    )
    .await;

    let expired = format!(
        "{}=; HttpOnly; Path=/; Max-Age=0",
        state.config.backend.session_cookie
    );
    if let Ok(value) = HeaderValue::from_str(&expired) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}
