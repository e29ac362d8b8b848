//! Lookup result and the router trait shared by both table forms.

/// Result of resolving a single request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome<'a> {
    /// Redirect the client to this target, verbatim.
    Redirect(&'a str),
    /// No mapping; the fallback handler owns the response.
    Fallthrough,
}

/// Maps request paths to redirect targets.
///
/// Implementations are immutable after construction and shared across
/// requests without locking.
pub trait PathRouter: Send + Sync + std::fmt::Debug {
    /// Resolve a request path to exactly one outcome.
    fn resolve(&self, path: &str) -> RouteOutcome<'_>;

    /// Short label used in logs and metrics.
    fn source(&self) -> &'static str;

    /// Number of mappings this router holds.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
