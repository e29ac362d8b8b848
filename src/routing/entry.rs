//! Mapping entry record.

use serde::{Deserialize, Serialize};

/// One (path, target) pair.
///
/// In documents the target field is spelled `url`; `target` is accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MappingEntry {
    /// Request path, compared by exact equality.
    pub path: String,

    /// Redirect destination, used verbatim.
    #[serde(rename = "url", alias = "target")]
    pub target: String,
}

impl MappingEntry {
    pub fn new(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            target: target.into(),
        }
    }
}
