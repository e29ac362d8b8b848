//! Default fallback handler.
//!
//! Used by the binary when no other handler is supplied: a greeting at `/`
//! and a plain 404 for everything else.

use axum::{http::StatusCode, routing::get, Router};

pub const NOT_FOUND_BODY: &str = "404 page not found";

async fn hello() -> &'static str {
    "Hello, world!"
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}

/// Router handling requests no redirect matched.
pub fn default_fallback() -> Router {
    Router::new().route("/", get(hello)).fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_root_greets() {
        let req = Request::builder().uri("/").body(Body::empty()).unwrap();
        let res = default_fallback().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Hello, world!");
    }

    #[tokio::test]
    async fn test_other_paths_not_found() {
        let req = Request::builder().uri("/missing").body(Body::empty()).unwrap();
        let res = default_fallback().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], NOT_FOUND_BODY.as_bytes());
    }
}
