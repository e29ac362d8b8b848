//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing / http produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (redirect / fall-through counters)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the HTTP trace span
//! - Metrics are cheap counter increments; a no-op without a recorder

pub mod logging;
pub mod metrics;
