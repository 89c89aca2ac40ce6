//! Caching policy applied to outbound responses.
//!
//! Dynamic and session-bearing resources are never cached; semi-static
//! resources (quotes, footer categories) declare a bounded lifetime forwarded
//! to downstream caches via Cache-Control and CDN-Cache-Control.

use axum::http::{HeaderMap, HeaderValue};

/// Per-resource caching policy, declared as data on the resource schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// `no-store`, plus Pragma/Expires for legacy caches.
    NoStore,
    /// Bounded public lifetime with stale-while-revalidate.
    Public {
        max_age_secs: u64,
        stale_while_revalidate_secs: u64,
    },
}

impl CachePolicy {
    /// Write this policy's header set into `headers`.
    pub fn apply(&self, headers: &mut HeaderMap) {
        match self {
            CachePolicy::NoStore => {
                headers.insert(
                    "cache-control",
                    HeaderValue::from_static("no-store, no-cache, must-revalidate"),
                );
                headers.insert("pragma", HeaderValue::from_static("no-cache"));
                headers.insert("expires", HeaderValue::from_static("0"));
            }
            CachePolicy::Public {
                max_age_secs,
                stale_while_revalidate_secs,
            } => {
                let value = format!(
                    "public, max-age={max_age_secs}, stale-while-revalidate={stale_while_revalidate_secs}"
                );
                if let Ok(value) = HeaderValue::from_str(&value) {
                    headers.insert("cache-control", value);
                }
                if let Ok(value) = HeaderValue::from_str(&format!("max-age={max_age_secs}")) {
                    headers.insert("cdn-cache-control", value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_store_headers() {
        let mut headers = HeaderMap::new();
        CachePolicy::NoStore.apply(&mut headers);
        assert_eq!(headers["cache-control"], "no-store, no-cache, must-revalidate");
        assert_eq!(headers["pragma"], "no-cache");
        assert_eq!(headers["expires"], "0");
    }

    #[test]
    fn test_public_policy_headers() {
        let mut headers = HeaderMap::new();
        CachePolicy::Public {
            max_age_secs: 300,
            stale_while_revalidate_secs: 60,
        }
        .apply(&mut headers);
        assert_eq!(
            headers["cache-control"],
            "public, max-age=300, stale-while-revalidate=60"
        );
        assert_eq!(headers["cdn-cache-control"], "max-age=300");
    }
}
