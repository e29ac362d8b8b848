//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Redirect table (config) ──▶ table.rs ────┐
//!                                          ├─▶ PathRouter::resolve(path)
//! Redirect document (bytes) ─▶ document.rs ┘        │
//!                                                   ▼
//!                                   RouteOutcome::Redirect(target)
//!                                 | RouteOutcome::Fallthrough
//! ```
//!
//! # Design Decisions
//! - Routers are built once at startup, immutable at runtime
//! - Exact path equality only: no wildcards, no normalization
//! - Static table: O(1) lookup, last write wins on duplicate input
//! - Document: O(n) ordered scan, first match wins
//! - A lookup yields exactly one outcome; dispatch lives in `http::redirect`

pub mod document;
pub mod entry;
pub mod error;
pub mod outcome;
pub mod table;

pub use document::{parse_document, DocumentFormat, DocumentRouter};
pub use entry::MappingEntry;
pub use error::{RoutingError, RoutingResult};
pub use outcome::{PathRouter, RouteOutcome};
pub use table::StaticTableRouter;
