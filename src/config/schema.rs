//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from the TOML config file.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::routing::DocumentFormat;

/// Root configuration for the redirect server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ShortenerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Static redirect table: request path → target.
    pub redirects: HashMap<String, String>,

    /// Optional redirect document, consulted before the static table.
    pub document: DocumentConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Redirect document location.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DocumentConfig {
    /// Path to a YAML or JSON redirect document.
    pub path: Option<PathBuf>,

    /// Document format; inferred from the file extension when unset.
    pub format: Option<DocumentFormat>,
}

impl DocumentConfig {
    /// Format to parse the document with.
    pub fn resolved_format(&self) -> DocumentFormat {
        match (self.format, &self.path) {
            (Some(format), _) => format,
            (None, Some(path)) => DocumentFormat::from_path(path),
            (None, None) => DocumentFormat::default(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
