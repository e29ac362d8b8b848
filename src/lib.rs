//! Path-based URL redirect service.
//!
//! Maps request paths to redirect targets from a static table or a YAML/JSON
//! document, falling back to another handler when nothing matches.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::schema::ShortenerConfig;
pub use http::{HttpServer, RedirectService};
pub use lifecycle::Shutdown;
pub use routing::{DocumentFormat, DocumentRouter, RouteOutcome, RoutingError, StaticTableRouter};
