//! Static table router.
//!
//! # Responsibilities
//! - Hold a fixed path → target table
//! - O(1) exact-match lookup
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc, no locks)
//! - Duplicate paths in iterator input: last write wins, logged at warn

use std::collections::HashMap;

use crate::routing::entry::MappingEntry;
use crate::routing::outcome::{PathRouter, RouteOutcome};

/// Router backed by a hash map of exact paths.
#[derive(Debug, Clone, Default)]
pub struct StaticTableRouter {
    table: HashMap<String, String>,
}

impl StaticTableRouter {
    /// Wrap an existing path → target table.
    pub fn new(table: HashMap<String, String>) -> Self {
        tracing::debug!(entries = table.len(), "Static redirect table built");
        Self { table }
    }

    /// Build from (path, target) pairs. A repeated path replaces the
    /// earlier target.
    pub fn from_pairs<I, P, T>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, T)>,
        P: Into<String>,
        T: Into<String>,
    {
        let mut table = HashMap::new();
        for (path, target) in pairs {
            let path = path.into();
            let target = target.into();
            if let Some(previous) = table.get(&path) {
                tracing::warn!(
                    path = %path,
                    previous = %previous,
                    location = %target,
                    "Duplicate redirect path, keeping last target"
                );
            }
            table.insert(path, target);
        }
        Self::new(table)
    }

    /// Look up a target without wrapping it in an outcome.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.table.get(path).map(String::as_str)
    }
}

impl FromIterator<MappingEntry> for StaticTableRouter {
    fn from_iter<I: IntoIterator<Item = MappingEntry>>(iter: I) -> Self {
        Self::from_pairs(iter.into_iter().map(|e| (e.path, e.target)))
    }
}

impl PathRouter for StaticTableRouter {
    fn resolve(&self, path: &str) -> RouteOutcome<'_> {
        match self.get(path) {
            Some(target) => RouteOutcome::Redirect(target),
            None => RouteOutcome::Fallthrough,
        }
    }

    fn source(&self) -> &'static str {
        "table"
    }

    fn len(&self) -> usize {
        self.table.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, String> {
        HashMap::from([
            ("/foo".to_string(), "https://foo.com".to_string()),
            ("/bar".to_string(), "https://bar.com".to_string()),
        ])
    }

    #[test]
    fn test_exact_match() {
        let router = StaticTableRouter::new(sample());
        assert_eq!(router.resolve("/bar"), RouteOutcome::Redirect("https://bar.com"));
        assert_eq!(router.resolve("/foo"), RouteOutcome::Redirect("https://foo.com"));
        assert_eq!(router.len(), 2);
    }

    #[test]
    fn test_no_normalization() {
        let router = StaticTableRouter::new(sample());
        assert_eq!(router.resolve("/baz"), RouteOutcome::Fallthrough);
        assert_eq!(router.resolve("/foo/"), RouteOutcome::Fallthrough);
        assert_eq!(router.resolve("/FOO"), RouteOutcome::Fallthrough);
        assert_eq!(router.resolve("foo"), RouteOutcome::Fallthrough);
    }

    #[test]
    fn test_duplicate_pairs_last_wins() {
        let router = StaticTableRouter::from_pairs([
            ("/dup", "https://first.example"),
            ("/dup", "https://second.example"),
        ]);
        assert_eq!(router.len(), 1);
        assert_eq!(router.get("/dup"), Some("https://second.example"));
    }

    #[test]
    fn test_construction_is_idempotent() {
        let a = StaticTableRouter::new(sample());
        let b = StaticTableRouter::new(sample());
        for path in ["/foo", "/bar", "/baz", "/", ""] {
            assert_eq!(a.resolve(path), b.resolve(path));
        }
    }

    #[test]
    fn test_from_entries() {
        let router: StaticTableRouter = vec![MappingEntry::new("/a", "https://a.example")]
            .into_iter()
            .collect();
        assert_eq!(router.resolve("/a"), RouteOutcome::Redirect("https://a.example"));
        assert_eq!(router.len(), 1);
    }

    #[test]
    fn test_empty_table_falls_through() {
        let router = StaticTableRouter::default();
        assert!(router.is_empty());
        assert_eq!(router.resolve("/anything"), RouteOutcome::Fallthrough);
    }
}
