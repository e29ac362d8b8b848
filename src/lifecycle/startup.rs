//! Startup orchestration.
//!
//! # Responsibilities
//! - Read and parse the redirect document, if configured
//! - Build the redirect chain: document → static table → fallback
//!
//! # Design Decisions
//! - Document entries shadow static table entries with the same path
//! - No document configured means an empty document router

use axum::Router;
use thiserror::Error;

use crate::config::{read_document, ConfigError, ShortenerConfig};
use crate::http::fallback::default_fallback;
use crate::http::RedirectService;
use crate::routing::{DocumentRouter, RoutingError, StaticTableRouter};

/// Redirect service stack mounted by the binary.
pub type RedirectChain = RedirectService<RedirectService<Router>>;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Routing(#[from] RoutingError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },
}

/// Build the redirect chain in front of `fallback`.
pub fn build_redirects_with(
    config: &ShortenerConfig,
    fallback: Router,
) -> Result<RedirectChain, StartupError> {
    let table = StaticTableRouter::new(config.redirects.clone());
    let table = RedirectService::new(table, fallback);

    let document = match &config.document.path {
        Some(path) => {
            let format = config.document.resolved_format();
            let bytes = read_document(path)?;
            let router = DocumentRouter::parse(&bytes, format).inspect_err(|e| {
                tracing::error!(path = ?path, error = %e, "Rejected redirect document");
            })?;
            tracing::info!(path = ?path, %format, entries = router.entries().len(), "Redirect document ready");
            router
        }
        None => DocumentRouter::default(),
    };

    tracing::info!(
        table_entries = config.redirects.len(),
        document_entries = document.entries().len(),
        "Redirect chain built"
    );
    Ok(RedirectService::new(document, table))
}

/// Build the redirect chain in front of the default fallback.
pub fn build_redirects(config: &ShortenerConfig) -> Result<RedirectChain, StartupError> {
    build_redirects_with(config, default_fallback())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::routing::RouteOutcome;

    #[test]
    fn test_without_document() {
        let mut config = ShortenerConfig::default();
        config.redirects.insert("/a".into(), "https://a.example".into());

        let chain = build_redirects(&config).unwrap();
        assert!(chain.router().is_empty());
        assert_eq!(chain.router().resolve("/a"), RouteOutcome::Fallthrough);
    }

    #[test]
    fn test_missing_document_file() {
        let mut config = ShortenerConfig::default();
        config.document.path = Some(PathBuf::from("/definitely/not/here.yaml"));

        let err = build_redirects(&config).unwrap_err();
        assert!(matches!(err, StartupError::Config(ConfigError::Io { .. })));
    }

    #[test]
    fn test_malformed_document_file() {
        let path = std::env::temp_dir().join(format!("urlshort-bad-{}.yaml", std::process::id()));
        std::fs::write(&path, "- path: /a\n    url: https://a.example\n").unwrap();

        let mut config = ShortenerConfig::default();
        config.document.path = Some(path.clone());
        let err = build_redirects(&config).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, StartupError::Routing(RoutingError::MalformedDocument { .. })));
    }

    #[test]
    fn test_document_file_loaded() {
        let path = std::env::temp_dir().join(format!("urlshort-ok-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"path": "/a", "url": "https://doc.example/a"}]"#).unwrap();

        let mut config = ShortenerConfig::default();
        config.document.path = Some(path.clone());
        let chain = build_redirects(&config);
        std::fs::remove_file(&path).unwrap();

        let chain = chain.unwrap();
        assert_eq!(chain.router().resolve("/a"), RouteOutcome::Redirect("https://doc.example/a"));
    }
}
