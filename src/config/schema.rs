//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files, and
//! every section has defaults so a minimal (or empty) config file is valid.

use serde::{Deserialize, Serialize};

/// Deployment environment the gateway is running in.
///
/// Resolved once at startup; handlers receive it through the shared
/// configuration rather than reading process state per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Root configuration for the news gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream news backend settings.
    pub backend: BackendSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl GatewayConfig {
    /// True when running against the development backend.
    pub fn is_development(&self) -> bool {
        self.backend.environment == Environment::Development
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream news backend settings.
///
/// The base URL is resolved once at load time (env override, then config
/// value, then the per-environment default) and is immutable afterwards.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackendSettings {
    /// Fully-qualified backend base URL. Empty means "use the
    /// per-environment default"; the loader fills it in.
    pub base_url: String,

    /// Deployment environment.
    pub environment: Environment,

    /// Outbound request timeout in seconds.
    pub timeout_secs: u64,

    /// Name of the browser session cookie (cleared on logout).
    pub session_cookie: String,
}

impl BackendSettings {
    /// Hardcoded default backend host for a given environment.
    pub fn default_base_url(environment: Environment) -> &'static str {
        match environment {
            Environment::Development => "http://localhost:5000",
            Environment::Production => "https://api.newsdesk.example.com",
        }
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            environment: Environment::Development,
            timeout_secs: 12,
            session_cookie: "news_session".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_development() {
        let config = GatewayConfig::default();
        assert!(config.is_development());
        assert_eq!(config.backend.timeout_secs, 12);
        assert_eq!(config.backend.session_cookie, "news_session");
    }

    #[test]
    fn test_empty_toml_is_valid() {
        let config: GatewayConfig = toml::from_str("").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_environment_parses_lowercase() {
        let config: GatewayConfig =
            toml::from_str("[backend]\nenvironment = \"production\"").unwrap();
        assert!(!config.is_development());
    }
}
