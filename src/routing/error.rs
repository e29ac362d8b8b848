//! Routing error definitions.

use thiserror::Error;

use crate::routing::document::DocumentFormat;

/// Errors raised while building a router.
///
/// Lookups never fail; only document parsing at construction time can.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// The document could not be parsed into redirect records.
    #[error("malformed {format} redirect document: {reason}")]
    MalformedDocument {
        format: DocumentFormat,
        reason: String,
    },
}

impl RoutingError {
    pub(crate) fn malformed(format: DocumentFormat, reason: impl ToString) -> Self {
        RoutingError::MalformedDocument {
            format,
            reason: reason.to_string(),
        }
    }
}

/// Result type for router construction.
pub type RoutingResult<T> = Result<T, RoutingError>;
