//! Redirect dispatch.
//!
//! # Responsibilities
//! - Resolve each percent-decoded request path through a `PathRouter`
//! - Answer a match with `302 Found` + `Location`, empty body
//! - Hand the unmodified request to the fallback otherwise
//!
//! # Design Decisions
//! - Exactly one branch runs per request: a matched path never reaches the fallback
//! - The fallback is any infallible tower service, so redirect services chain
//! - Router is shared via Arc; cloning the service is cheap

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use percent_encoding::percent_decode_str;
use tower::{Service, ServiceExt};

use crate::observability::metrics;
use crate::routing::{
    DocumentFormat, DocumentRouter, PathRouter, RouteOutcome, RoutingResult, StaticTableRouter,
};

/// Build the redirect response for `target`.
///
/// The target is used verbatim. A target that cannot be carried in a
/// header (control characters) produces a 500 instead.
pub fn redirect_response(target: &str) -> Response {
    match HeaderValue::from_bytes(target.as_bytes()) {
        Ok(location) => (StatusCode::FOUND, [(header::LOCATION, location)]).into_response(),
        Err(e) => {
            tracing::error!(location = %target.escape_debug(), error = %e, "Redirect target is not a valid header value");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Percent-decode a request path for lookup.
///
/// Returns `None` when the decoded bytes are not UTF-8; such a path can
/// never match a mapping.
pub fn decoded_path(raw: &str) -> Option<String> {
    percent_decode_str(raw)
        .decode_utf8()
        .ok()
        .map(|path| path.into_owned())
}

/// Tower service that redirects mapped paths and delegates the rest.
#[derive(Clone)]
pub struct RedirectService<F> {
    router: Arc<dyn PathRouter>,
    fallback: F,
}

impl<F> RedirectService<F> {
    /// Wrap any router with a fallback.
    pub fn new<R>(router: R, fallback: F) -> Self
    where
        R: PathRouter + 'static,
    {
        Self::from_shared(Arc::new(router), fallback)
    }

    /// Wrap an already shared router.
    pub fn from_shared(router: Arc<dyn PathRouter>, fallback: F) -> Self {
        Self { router, fallback }
    }

    /// Redirect service over a static path → target table.
    pub fn from_table(table: HashMap<String, String>, fallback: F) -> Self {
        Self::new(StaticTableRouter::new(table), fallback)
    }

    /// Redirect service over a parsed document.
    ///
    /// Fails with `MalformedDocument` if the document cannot be parsed; no
    /// service is produced in that case.
    pub fn from_document(
        document: &[u8],
        format: DocumentFormat,
        fallback: F,
    ) -> RoutingResult<Self> {
        let router = DocumentRouter::parse(document, format)?;
        Ok(Self::new(router, fallback))
    }

    pub fn router(&self) -> &dyn PathRouter {
        self.router.as_ref()
    }
}

impl<F> std::fmt::Debug for RedirectService<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectService")
            .field("router", &self.router)
            .finish_non_exhaustive()
    }
}

impl<F> Service<Request<Body>> for RedirectService<F>
where
    F: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    F::Response: IntoResponse,
    F::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Readiness of the fallback is checked by `oneshot` on fall-through.
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let source = self.router.source();
        let path = decoded_path(req.uri().path());

        let outcome = match &path {
            Some(path) => self.router.resolve(path),
            None => RouteOutcome::Fallthrough,
        };

        match outcome {
            RouteOutcome::Redirect(target) => {
                tracing::debug!(
                    path = %req.uri().path(),
                    location = %target,
                    source,
                    "Redirecting"
                );
                metrics::record_redirect(source);
                let response = redirect_response(target);
                Box::pin(async move { Ok(response) })
            }
            RouteOutcome::Fallthrough => {
                tracing::trace!(path = %req.uri().path(), source, "No redirect, using fallback");
                metrics::record_fallthrough(source);
                let fallback = self.fallback.clone();
                Box::pin(async move {
                    let response = fallback.oneshot(req).await?;
                    Ok(response.into_response())
                })
            }
        }
    }
}
