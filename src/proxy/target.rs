//! Backend target resolution.
//!
//! # Responsibilities
//! - Build the fully-qualified backend URL for a resource
//! - Percent-encode interpolated path segments (slugs, IDs)
//! - Forward only the query parameters a resource expects
//!
//! # Design Decisions
//! - Pure function of (base URL, path segments, query); no I/O
//! - Encoding goes through the `url` crate's segment API so unescaped
//!   characters can never smuggle extra path components

use std::collections::HashMap;

use url::Url;

use crate::error::GatewayError;

/// Resolve the backend URL for a resource.
///
/// `segments` are appended one by one and percent-encoded individually;
/// `query` pairs are appended in order.
pub fn resolve(
    base_url: &str,
    segments: &[&str],
    query: &[(&str, String)],
) -> Result<Url, GatewayError> {
    let mut url = Url::parse(base_url)?;

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| GatewayError::Internal("backend base URL cannot be a base".into()))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }

    if !query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in query {
            pairs.append_pair(key, value);
        }
    }

    Ok(url)
}

/// Select the query parameters a resource forwards, in declaration order.
/// Absent and empty parameters are omitted, never forwarded as empty strings.
pub fn pick_params(
    params: &HashMap<String, String>,
    keys: &[&'static str],
) -> Vec<(&'static str, String)> {
    keys.iter()
        .filter_map(|key| {
            params
                .get(*key)
                .filter(|value| !value.is_empty())
                .map(|value| (*key, value.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_plain_path() {
        let url = resolve("http://localhost:5000", &["api", "quotes"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/quotes");
    }

    #[test]
    fn test_resolve_encodes_segments() {
        let url = resolve(
            "http://localhost:5000",
            &["api", "categories", "world news/politics"],
            &[],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/categories/world%20news%2Fpolitics"
        );
    }

    #[test]
    fn test_resolve_appends_query() {
        let url = resolve(
            "http://localhost:5000",
            &["api", "search"],
            &[("q", "elections".to_string()), ("page", "2".to_string())],
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/search?q=elections&page=2"
        );
    }

    #[test]
    fn test_pick_params_skips_absent_and_empty() {
        let mut params = HashMap::new();
        params.insert("page".to_string(), "3".to_string());
        params.insert("sort".to_string(), String::new());

        let picked = pick_params(&params, &["q", "page", "sort"]);
        assert_eq!(picked, vec![("page", "3".to_string())]);
    }
}
