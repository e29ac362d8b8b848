//! Structured-document router.
//!
//! # Responsibilities
//! - Parse a YAML or JSON document into an ordered list of mapping entries
//! - Resolve request paths by ordered scan (first match wins)
//!
//! # Design Decisions
//! - Parse failures are returned to the caller, never fatal
//! - Blank input is an empty mapping: every request falls through
//! - Document order is preserved so earlier entries shadow later ones

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::entry::MappingEntry;
use crate::routing::error::{RoutingError, RoutingResult};
use crate::routing::outcome::{PathRouter, RouteOutcome};

/// Serialization format of a redirect document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick a format from a file extension. Anything other than `.json`
    /// is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Yaml => f.write_str("yaml"),
            DocumentFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "json" => Ok(DocumentFormat::Json),
            other => Err(format!("unknown document format `{other}` (expected yaml or json)")),
        }
    }
}

/// Parse a redirect document into entries, preserving document order.
pub fn parse_document(document: &[u8], format: DocumentFormat) -> RoutingResult<Vec<MappingEntry>> {
    if document.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let entries = match format {
        DocumentFormat::Yaml => serde_yaml::from_slice::<Option<Vec<MappingEntry>>>(document)
            .map_err(|e| RoutingError::malformed(format, e))?
            .unwrap_or_default(),
        DocumentFormat::Json => serde_json::from_slice::<Vec<MappingEntry>>(document)
            .map_err(|e| RoutingError::malformed(format, e))?,
    };

    if let Some(index) = entries.iter().position(|e| e.path.is_empty()) {
        return Err(RoutingError::malformed(
            format,
            format!("record {} has an empty path", index + 1),
        ));
    }

    Ok(entries)
}

/// Router over an ordered mapping sequence.
#[derive(Debug, Clone, Default)]
pub struct DocumentRouter {
    entries: Vec<MappingEntry>,
}

impl DocumentRouter {
    /// Parse `document` and build a router from it.
    pub fn parse(document: &[u8], format: DocumentFormat) -> RoutingResult<Self> {
        let entries = parse_document(document, format)?;
        Ok(Self::from_entries(entries))
    }

    /// Build from already-parsed entries, keeping their order.
    pub fn from_entries(entries: Vec<MappingEntry>) -> Self {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|earlier| earlier.path == entry.path) {
                tracing::debug!(
                    path = %entry.path,
                    location = %entry.target,
                    "Redirect entry shadowed by an earlier one"
                );
            }
        }
        tracing::info!(entries = entries.len(), "Redirect document loaded");
        Self { entries }
    }

    pub fn entries(&self) -> &[MappingEntry] {
        &self.entries
    }
}

impl PathRouter for DocumentRouter {
    fn resolve(&self, path: &str) -> RouteOutcome<'_> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map(|entry| RouteOutcome::Redirect(entry.target.as_str()))
            .unwrap_or(RouteOutcome::Fallthrough)
    }

    fn source(&self) -> &'static str {
        "document"
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
