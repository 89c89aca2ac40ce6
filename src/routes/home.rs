//! Front-page aggregator.
//!
//! The only handler that fans out: breaking and trending fetches run
//! concurrently and are joined before responding. Either side failing
//! degrades to an empty list; both failing is a transport failure.

use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::Response;
use serde_json::{json, Value};

use crate::error::GatewayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::proxy;
use crate::proxy::invoke::BackendResponse;
use crate::proxy::translate::{self, ResourceSchema};

static HOME: ResourceSchema = ResourceSchema::new("home")
    .arrays(&["breaking", "trending"])
    .cached(120, 30);

/// Pull the named array out of a backend body, tolerating absence.
fn articles(body: Option<Value>, field: &str) -> Option<Value> {
    match body? {
        Value::Object(mut object) => object.remove(field),
        _ => None,
    }
}

/// Reduce one joined feed to its article list, banking any Set-Cookie
/// values so the combined response still relays them.
fn feed(
    side: Result<BackendResponse, GatewayError>,
    cookies: &mut Vec<HeaderValue>,
) -> Value {
    let Ok(backend) = side else {
        return json!([]);
    };
    let well_formed = backend.is_well_formed();
    cookies.extend(backend.set_cookie);
    if well_formed {
        articles(backend.body, "articles").unwrap_or_else(|| json!([]))
    } else {
        json!([])
    }
}

/// GET /api/home — combined breaking + trending feed for the front page.
pub async fn aggregate(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let start = Instant::now();
    let id = proxy::request_id(&headers);

    let (breaking, trending) = tokio::join!(
        proxy::forward(
            &state,
            &id,
            Method::GET,
            &["api", "articles", "breaking"],
            vec![],
            &headers,
            None,
        ),
        proxy::forward(
            &state,
            &id,
            Method::GET,
            &["api", "articles", "trending"],
            vec![],
            &headers,
            None,
        ),
    );

    let response = match (breaking, trending) {
        (Err(breaking_err), Err(_)) => translate::failure(&breaking_err, &HOME, &state.config),
        (breaking, trending) => {
            let mut cookies = Vec::new();
            let breaking = feed(breaking, &mut cookies);
            let trending = feed(trending, &mut cookies);

            let body = json!({
                "success": true,
                "breaking": breaking,
                "trending": trending,
            });
            translate::build(StatusCode::OK, body, &HOME, HOME.cache, &cookies)
        }
    };

    metrics::record_request(HOME.resource, response.status().as_u16(), start);
    tracing::debug!(
        request_id = %id,
        resource = %HOME.resource,
        status = %response.status(),
        "Aggregated front page"
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_articles_extracted_from_object() {
        let body = json!({"success": true, "articles": [{"id": 1}]});
        assert_eq!(articles(Some(body), "articles"), Some(json!([{"id": 1}])));
    }

    #[test]
    fn test_articles_tolerates_absence() {
        assert_eq!(articles(Some(json!({"success": true})), "articles"), None);
        assert_eq!(articles(None, "articles"), None);
        assert_eq!(articles(Some(json!([1, 2])), "articles"), None);
    }

    #[test]
    fn test_feed_banks_set_cookie_values() {
        let cookie = HeaderValue::from_static("news_session=refreshed; HttpOnly; Path=/");
        let backend = BackendResponse {
            status: StatusCode::OK,
            body: Some(json!({"success": true, "articles": [{"id": 7}]})),
            set_cookie: vec![cookie.clone()],
        };

        let mut cookies = Vec::new();
        let list = feed(Ok(backend), &mut cookies);

        assert_eq!(list, json!([{"id": 7}]));
        assert_eq!(cookies, vec![cookie]);
    }

    #[test]
    fn test_feed_banks_cookies_even_when_body_degrades() {
        let cookie = HeaderValue::from_static("news_session=refreshed");
        let backend = BackendResponse {
            status: StatusCode::OK,
            body: None,
            set_cookie: vec![cookie.clone()],
        };

        let mut cookies = Vec::new();
        assert_eq!(feed(Ok(backend), &mut cookies), json!([]));
        assert_eq!(cookies, vec![cookie]);
    }
}
