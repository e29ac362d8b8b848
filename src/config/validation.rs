//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and value ranges
//! - Reject empty redirect paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShortenerConfig → Result<(), Vec<ValidationError>>
//! - Redirect targets are not validated

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ShortenerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid listener bind address `{0}`")]
    InvalidBindAddress(String),

    #[error("redirect table contains an empty path (target `{0}`)")]
    EmptyRedirectPath(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,

    #[error("invalid metrics address `{0}`")]
    InvalidMetricsAddress(String),
}

/// Check `config` and collect every problem found.
pub fn validate_config(config: &ShortenerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for (path, target) in &config.redirects {
        if path.is_empty() {
            errors.push(ValidationError::EmptyRedirectPath(target.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
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

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ShortenerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ShortenerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.redirects.insert(String::new(), "https://x.example".into());
        config.timeouts.request_secs = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nope".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroRequestTimeout));
        assert!(errors.contains(&ValidationError::EmptyRedirectPath("https://x.example".into())));
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = ShortenerConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_targets_not_validated() {
        let mut config = ShortenerConfig::default();
        config.redirects.insert("/x".into(), "definitely not a url".into());
        assert!(validate_config(&config).is_ok());
    }
}
