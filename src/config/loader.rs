//! Configuration and redirect document loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ShortenerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deserialize configuration from TOML text without semantic checks.
pub fn deserialize_config(content: &str) -> Result<ShortenerConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ShortenerConfig, ConfigError> {
    let config = deserialize_config(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read and deserialize a TOML config file. Validation is left to the
/// caller so command-line overrides can be applied first.
pub fn read_config(path: &Path) -> Result<ShortenerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = deserialize_config(&content)?;
    tracing::debug!(path = ?path, redirects = config.redirects.len(), "Configuration file loaded");
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ShortenerConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Read a redirect document's raw bytes. Parsing happens in `routing`.
pub fn read_document(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
