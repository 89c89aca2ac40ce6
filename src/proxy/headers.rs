//! Header projection for outbound backend requests.
//!
//! # Responsibilities
//! - Select the inbound headers that may reach the backend
//! - Default User-Agent to the gateway's client identifier when absent
//! - Pick one client-address header, X-Forwarded-For winning over X-Real-IP
//!
//! # Design Decisions
//! - The allow-list is one static rule table; every handler gets identical
//!   forwarding semantics by construction
//! - Headers outside the table are never forwarded
//! - Absent optional headers are omitted, not sent as empty strings

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

/// Client identifier sent upstream when the browser supplied no User-Agent.
pub const GATEWAY_USER_AGENT: &str = "news-gateway/0.1";

/// CSRF token header, forwarded for mutation safety.
pub const X_CSRF_TOKEN: &str = "x-csrf-token";
/// Client address header; takes precedence over X-Real-IP.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
/// Fallback client address header.
pub const X_REAL_IP: &str = "x-real-ip";
/// Correlation ID, generated by the gateway when the browser sent none.
pub const X_REQUEST_ID: &str = "x-request-id";

/// How a single outbound header is derived from the inbound set.
enum ForwardRule {
    /// Copy the header when present.
    Copy(HeaderName),
    /// Copy when present, otherwise emit a fixed default.
    CopyOrDefault(HeaderName, &'static str),
    /// Emit under `target` the first present header among `sources`.
    FirstOf {
        target: HeaderName,
        sources: &'static [&'static str],
    },
}

fn forwarding_rules() -> Vec<ForwardRule> {
    vec![
        ForwardRule::Copy(header::COOKIE),
        ForwardRule::Copy(header::AUTHORIZATION),
        ForwardRule::Copy(HeaderName::from_static(X_CSRF_TOKEN)),
        ForwardRule::CopyOrDefault(header::USER_AGENT, GATEWAY_USER_AGENT),
        ForwardRule::FirstOf {
            target: HeaderName::from_static(X_FORWARDED_FOR),
            sources: &[X_FORWARDED_FOR, X_REAL_IP],
        },
    ]
}

/// Project the inbound headers onto the outbound allow-listed set.
pub fn project(inbound: &HeaderMap) -> HeaderMap {
    let mut outbound = HeaderMap::new();

    for rule in forwarding_rules() {
        match rule {
            ForwardRule::Copy(name) => {
                if let Some(value) = inbound.get(&name) {
                    outbound.insert(name, value.clone());
                }
            }
            ForwardRule::CopyOrDefault(name, default) => {
                let value = inbound
                    .get(&name)
                    .cloned()
                    .unwrap_or_else(|| HeaderValue::from_static(default));
                outbound.insert(name, value);
            }
            ForwardRule::FirstOf { target, sources } => {
                if let Some(value) = sources.iter().find_map(|source| inbound.get(*source)) {
                    outbound.insert(target, value.clone());
                }
            }
        }
    }

    outbound
}
