//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign / propagate request ID)
//!     → redirect.rs (resolve path: 302 or fall through)
//!     → fallback.rs (default response when nothing matched)
//!     → Send to client
//! ```

pub mod fallback;
pub mod redirect;
pub mod request;
pub mod server;

pub use redirect::{decoded_path, redirect_response, RedirectService};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
