//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect chain as its only handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Stop accepting and drain on shutdown

use std::convert::Infallible;
use std::time::Duration;

use axum::{body::Body, extract::Request, http::Request as HttpRequest, response::IntoResponse, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ShortenerConfig;
use crate::http::request::{propagate_request_id_layer, request_id, set_request_id_layer};

/// HTTP server for the redirect service.
pub struct HttpServer {
    router: Router,
    config: ShortenerConfig,
}

impl HttpServer {
    /// Create a new HTTP server that answers every request with `redirects`.
    pub fn new<S>(config: ShortenerConfig, redirects: S) -> Self
    where
        S: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        S::Response: IntoResponse,
        S::Future: Send + 'static,
    {
        let router = Self::build_router(&config, redirects);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router<S>(config: &ShortenerConfig, redirects: S) -> Router
    where
        S: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        S::Response: IntoResponse,
        S::Future: Send + 'static,
    {
        Router::new()
            .fallback_service(redirects)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(|req: &HttpRequest<Body>| {
                tracing::info_span!(
                    "request",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id(req),
                )
            }))
            .layer(set_request_id_layer())
    }

    /// Run the server, accepting connections until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config().timeouts.request_secs,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    /// The assembled router, for driving requests without a socket.
    pub fn into_router(self) -> Router {
        self.router
    }
}
