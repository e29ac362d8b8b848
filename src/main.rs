//! URL shortener / redirect server.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client Request
//!   ──────────────▶ listener ─▶ http server ─▶ document router ─┬─▶ 302 Location
//!                               (middleware)      │ no match      │
//!                                                 ▼               │
//!                                            table router ────────┤
//!                                                 │ no match      │
//!                                                 ▼               │
//!                                            fallback ─▶ 200 / 404
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{read_config, validate_config, ConfigError, ShortenerConfig};
use urlshort::http::HttpServer;
use urlshort::lifecycle::{build_redirects, signals, Shutdown, StartupError};
use urlshort::observability::{logging, metrics};
use urlshort::routing::DocumentFormat;

#[derive(Parser, Debug)]
#[command(name = "urlshort")]
#[command(about = "Redirect request paths to their mapped URLs", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// YAML or JSON redirect document (overrides `document.path`).
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Document format: yaml or json (default: from file extension).
    #[arg(short, long)]
    format: Option<DocumentFormat>,

    /// Listener bind address (overrides `listener.bind_address`).
    #[arg(short, long)]
    bind: Option<String>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut ShortenerConfig) {
        if let Some(document) = &self.document {
            config.document.path = Some(document.clone());
        }
        if let Some(format) = self.format {
            config.document.format = Some(format);
        }
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => ShortenerConfig::default(),
    };
    cli.apply_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_tracing(&config.observability.log_level)?;
    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        redirects = config.redirects.len(),
        document = ?config.document.path,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let redirects = build_redirects(&config)?;

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    let server = HttpServer::new(config, redirects);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_fix_invalid_file_values() {
        let mut config = ShortenerConfig::default();
        config.listener.bind_address = "not-an-address".into();
        assert!(validate_config(&config).is_err());

        let cli = Cli::parse_from(["urlshort", "--bind", "127.0.0.1:9999", "--format", "json"]);
        cli.apply_overrides(&mut config);

        assert_eq!(config.listener.bind_address, "127.0.0.1:9999");
        assert_eq!(config.document.format, Some(DocumentFormat::Json));
        assert!(validate_config(&config).is_ok());
    }
}
