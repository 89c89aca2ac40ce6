//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the backend base URL actually parses
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("backend.base_url is not a valid URL: {0}")]
    InvalidBaseUrl(String),

    #[error("backend.timeout_secs must be between 1 and 60, got {0}")]
    TimeoutOutOfRange(u64),

    #[error("backend.session_cookie must not be empty")]
    EmptySessionCookie,

    #[error("listener.bind_address is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("observability.metrics_address is not a valid socket address: {0}")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if Url::parse(&config.backend.base_url).is_err() {
        errors.push(ValidationError::InvalidBaseUrl(
            config.backend.base_url.clone(),
        ));
    }

    if config.backend.timeout_secs == 0 || config.backend.timeout_secs > 60 {
        errors.push(ValidationError::TimeoutOutOfRange(
            config.backend.timeout_secs,
        ));
    }

    if config.backend.session_cookie.is_empty() {
        errors.push(ValidationError::EmptySessionCookie);
    }

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.backend.base_url = "http://localhost:5000".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = valid_config();
        config.backend.base_url = "not a url".to_string();
        config.backend.timeout_secs = 0;
        config.backend.session_cookie = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_timeout_upper_bound() {
        let mut config = valid_config();
        config.backend.timeout_secs = 61;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::TimeoutOutOfRange(61)]);
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = valid_config();
        config.observability.metrics_enabled = false;
        config.observability.metrics_address = "nonsense".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
