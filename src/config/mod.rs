//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → ShortenerConfig (validated, immutable)
//!     → CLI flags applied on top (binary: read_config, then validate once)
//!
//! redirect document (YAML/JSON)
//!     → loader.rs (read bytes only; parsing belongs to routing)
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup; no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{
    deserialize_config, load_config, parse_config, read_config, read_document, ConfigError,
};
pub use schema::{
    DocumentConfig, ListenerConfig, ObservabilityConfig, ShortenerConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
