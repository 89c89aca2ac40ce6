//! Backend response translation.
//!
//! # Responsibilities
//! - Apply the per-resource schema: default missing array/object fields,
//!   normalize pagination
//! - Map 401/403 on protected resources to the fixed auth envelopes
//! - Relay Set-Cookie byte-for-byte and attach cache/CORS headers
//! - Convert every failure class into the `{success: bool, ...}` envelope
//!
//! # Design Decisions
//! - Defaulting rules are data on `ResourceSchema`, applied by one shared
//!   function; no handler reshapes JSON ad hoc
//! - Backend error bodies are relayed with the backend's status when they
//!   parse; otherwise a generic message is synthesized at the same status

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::Response;
use serde_json::{json, Map, Value};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::proxy::cache::CachePolicy;
use crate::proxy::cors::CorsPolicy;
use crate::proxy::invoke::BackendResponse;

/// Declarative translation rules for one logical resource.
#[derive(Debug, Clone, Copy)]
pub struct ResourceSchema {
    /// Resource name for logs and metrics.
    pub resource: &'static str,
    /// Fields defaulted to `[]` when absent from a well-formed body.
    pub array_defaults: &'static [&'static str],
    /// Fields defaulted to `{}` when absent from a well-formed body.
    pub object_defaults: &'static [&'static str],
    /// Normalize the `pagination` object to {page, limit, total, hasNext, hasPrev}.
    pub normalize_pagination: bool,
    /// Session-gated: 401 maps to the fixed authentication envelope.
    pub session_gated: bool,
    /// Caching policy for successful responses.
    pub cache: CachePolicy,
    /// CORS header set, when the resource is called cross-origin.
    pub cors: Option<&'static CorsPolicy>,
}

impl ResourceSchema {
    pub const fn new(resource: &'static str) -> Self {
        Self {
            resource,
            array_defaults: &[],
            object_defaults: &[],
            normalize_pagination: false,
            session_gated: false,
            cache: CachePolicy::NoStore,
            cors: None,
        }
    }

    pub const fn gated(mut self) -> Self {
        self.session_gated = true;
        self
    }

    pub const fn arrays(mut self, fields: &'static [&'static str]) -> Self {
        self.array_defaults = fields;
        self
    }

    pub const fn objects(mut self, fields: &'static [&'static str]) -> Self {
        self.object_defaults = fields;
        self
    }

    pub const fn paginated(mut self) -> Self {
        self.normalize_pagination = true;
        self
    }

    pub const fn cached(mut self, max_age_secs: u64, stale_while_revalidate_secs: u64) -> Self {
        self.cache = CachePolicy::Public {
            max_age_secs,
            stale_while_revalidate_secs,
        };
        self
    }

    pub const fn with_cors(mut self, cors: &'static CorsPolicy) -> Self {
        self.cors = Some(cors);
        self
    }
}

/// Translate an invocation outcome into the outbound response.
pub fn respond(
    outcome: Result<BackendResponse, GatewayError>,
    schema: &ResourceSchema,
    config: &GatewayConfig,
) -> Response {
    match outcome {
        Ok(backend) => translate(backend, schema, config.is_development()),
        Err(err) => failure(&err, schema, config),
    }
}

/// Build the outbound response for a gateway failure class.
pub fn failure(err: &GatewayError, schema: &ResourceSchema, config: &GatewayConfig) -> Response {
    tracing::warn!(
        resource = %schema.resource,
        status = %err.status(),
        error = %err,
        "Request failed at gateway"
    );
    let body = err.envelope(config.is_development());
    build(err.status(), body, schema, CachePolicy::NoStore, &[])
}

fn translate(backend: BackendResponse, schema: &ResourceSchema, include_detail: bool) -> Response {
    // Fixed auth envelopes take precedence over whatever the backend sent.
    if schema.session_gated && backend.status == StatusCode::UNAUTHORIZED {
        let body = json!({
            "success": false,
            "authenticated": false,
            "message": "Authentication required",
        });
        return build(
            StatusCode::UNAUTHORIZED,
            body,
            schema,
            CachePolicy::NoStore,
            &backend.set_cookie,
        );
    }
    if backend.status == StatusCode::FORBIDDEN {
        let body = json!({
            "success": false,
            "message": "Insufficient permissions",
        });
        return build(
            StatusCode::FORBIDDEN,
            body,
            schema,
            CachePolicy::NoStore,
            &backend.set_cookie,
        );
    }

    if backend.status.is_success() {
        match backend.body {
            Some(Value::Object(mut object)) => {
                apply_defaults(&mut object, schema);
                build(
                    backend.status,
                    Value::Object(object),
                    schema,
                    schema.cache,
                    &backend.set_cookie,
                )
            }
            // 2xx with a non-JSON (or non-object) body is an upstream defect.
            _ => {
                tracing::warn!(
                    resource = %schema.resource,
                    upstream_status = %backend.status,
                    "Backend returned malformed body"
                );
                let body = GatewayError::MalformedBody.envelope(include_detail);
                build(
                    StatusCode::BAD_GATEWAY,
                    body,
                    schema,
                    CachePolicy::NoStore,
                    &backend.set_cookie,
                )
            }
        }
    } else {
        // Relay the backend's own error envelope when it parses; otherwise
        // synthesize a generic one at the same status.
        let body = match backend.body {
            Some(Value::Object(mut object)) => {
                object
                    .entry("success")
                    .or_insert(Value::Bool(false));
                Value::Object(object)
            }
            _ => json!({
                "success": false,
                "message": "Upstream request failed",
            }),
        };
        build(
            backend.status,
            body,
            schema,
            CachePolicy::NoStore,
            &backend.set_cookie,
        )
    }
}

fn apply_defaults(object: &mut Map<String, Value>, schema: &ResourceSchema) {
    object.entry("success").or_insert(Value::Bool(true));

    for field in schema.array_defaults {
        object
            .entry(*field)
            .or_insert_with(|| Value::Array(Vec::new()));
    }
    for field in schema.object_defaults {
        object
            .entry(*field)
            .or_insert_with(|| Value::Object(Map::new()));
    }

    if schema.normalize_pagination {
        let pagination = object
            .entry("pagination")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(pagination) = pagination {
            pagination.entry("page").or_insert(json!(1));
            pagination.entry("limit").or_insert(json!(10));
            pagination.entry("total").or_insert(json!(0));
            pagination.entry("hasNext").or_insert(Value::Bool(false));
            pagination.entry("hasPrev").or_insert(Value::Bool(false));
        }
    }
}

/// Assemble the response: status, JSON body, cache/CORS headers, relayed
/// Set-Cookie values.
pub fn build(
    status: StatusCode,
    body: Value,
    schema: &ResourceSchema,
    cache: CachePolicy,
    set_cookie: &[HeaderValue],
) -> Response {
    let bytes = serde_json::to_vec(&body).unwrap_or_else(|_| b"{\"success\":false}".to_vec());
    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;

    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    cache.apply(headers);
    if let Some(cors) = schema.cors {
        cors.apply(headers);
    }
    for cookie in set_cookie {
        headers.append(header::SET_COOKIE, cookie.clone());
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated() -> ResourceSchema {
        let mut schema = ResourceSchema::new("test");
        schema.session_gated = true;
        schema
    }

    fn backend(status: StatusCode, body: Option<Value>) -> BackendResponse {
        BackendResponse {
            status,
            body,
            set_cookie: vec![],
        }
    }

    #[test]
    fn test_401_maps_to_fixed_envelope() {
        let response = translate(
            backend(StatusCode::UNAUTHORIZED, Some(json!({"detail": "nope"}))),
            &gated(),
            false,
        );
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_403_maps_even_when_not_gated() {
        let schema = ResourceSchema::new("test");
        let response = translate(backend(StatusCode::FORBIDDEN, None), &schema, false);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_2xx_non_json_becomes_502() {
        let schema = ResourceSchema::new("test");
        let response = translate(backend(StatusCode::OK, None), &schema, false);
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_502_detail_follows_environment_flag() {
        let schema = ResourceSchema::new("test");

        let terse = translate(backend(StatusCode::OK, None), &schema, false);
        let bytes = axum::body::to_bytes(terse.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body.get("error").is_none());

        let verbose = translate(backend(StatusCode::OK, None), &schema, true);
        let bytes = axum::body::to_bytes(verbose.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], Value::Bool(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("malformed backend response body"));
    }

    #[test]
    fn test_upstream_error_status_relayed() {
        let schema = ResourceSchema::new("test");
        let response = translate(
            backend(
                StatusCode::UNPROCESSABLE_ENTITY,
                Some(json!({"success": false, "message": "bad slug"})),
            ),
            &schema,
            false,
        );
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_set_cookie_relayed_verbatim() {
        let schema = ResourceSchema::new("test");
        let cookie = HeaderValue::from_static("news_session=tok; HttpOnly; Path=/");
        let response = translate(
            BackendResponse {
                status: StatusCode::OK,
                body: Some(json!({"success": true})),
                set_cookie: vec![cookie.clone()],
            },
            &schema,
            false,
        );
        assert_eq!(response.headers()[header::SET_COOKIE], cookie);
    }

    #[test]
    fn test_array_defaults_applied() {
        let mut object = match json!({"success": true, "quotes": [1]}) {
            Value::Object(o) => o,
            _ => unreachable!(),
        };
        let mut schema = ResourceSchema::new("quotes");
        schema.array_defaults = &["quotes", "strikingQuotes", "trendingQuotes"];
        apply_defaults(&mut object, &schema);

        assert_eq!(object["quotes"], json!([1]));
        assert_eq!(object["strikingQuotes"], json!([]));
        assert_eq!(object["trendingQuotes"], json!([]));
    }

    #[test]
    fn test_pagination_normalized() {
        let mut object = match json!({"pagination": {"page": 3, "total": 42}}) {
            Value::Object(o) => o,
            _ => unreachable!(),
        };
        let mut schema = ResourceSchema::new("search");
        schema.normalize_pagination = true;
        apply_defaults(&mut object, &schema);

        let pagination = &object["pagination"];
        assert_eq!(pagination["page"], json!(3));
        assert_eq!(pagination["total"], json!(42));
        assert_eq!(pagination["limit"], json!(10));
        assert_eq!(pagination["hasNext"], Value::Bool(false));
        assert_eq!(pagination["hasPrev"], Value::Bool(false));
    }

    #[test]
    fn test_success_defaulted_true_on_2xx() {
        let mut object = Map::new();
        apply_defaults(&mut object, &ResourceSchema::new("test"));
        assert_eq!(object["success"], Value::Bool(true));
    }
}
