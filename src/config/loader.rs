//! Configuration loading from disk and environment.
//!
//! Resolution order for the backend base URL: `NEWS_BACKEND_URL` environment
//! variable, then the config file value, then the hardcoded per-environment
//! default. `NEWS_GATEWAY_ENV` overrides the configured environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{BackendSettings, Environment, GatewayConfig};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file, applying environment
/// overrides afterwards.
pub fn load_config(path: &Path) -> Result<GatewayConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: GatewayConfig = toml::from_str(&content)?;
    finalize(config)
}

/// Build a configuration from defaults plus environment overrides, for
/// running without a config file.
pub fn from_env() -> Result<GatewayConfig, ConfigError> {
    finalize(GatewayConfig::default())
}

fn finalize(mut config: GatewayConfig) -> Result<GatewayConfig, ConfigError> {
    if let Ok(env) = std::env::var("NEWS_GATEWAY_ENV") {
        config.backend.environment = match env.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        };
    }

    if let Ok(url) = std::env::var("NEWS_BACKEND_URL") {
        if !url.is_empty() {
            config.backend.base_url = url;
        }
    }
    if config.backend.base_url.is_empty() {
        config.backend.base_url =
            BackendSettings::default_base_url(config.backend.environment).to_string();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_development_url() {
        let mut config = GatewayConfig::default();
        config.backend.base_url =
            BackendSettings::default_base_url(config.backend.environment).to_string();
        assert_eq!(config.backend.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_production_default_url() {
        assert_eq!(
            BackendSettings::default_base_url(Environment::Production),
            "https://api.newsdesk.example.com"
        );
    }
}
