//! Metrics collection and exposition.
//!
//! # Metrics
//! - `urlshort_redirects_total` (counter): redirects issued, by router source
//! - `urlshort_fallthrough_total` (counter): requests handed to the fallback, by router source
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no-op until a recorder is installed
//! - Prometheus exporter is opt-in via config

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

pub const REDIRECTS_TOTAL: &str = "urlshort_redirects_total";
pub const FALLTHROUGH_TOTAL: &str = "urlshort_fallthrough_total";

/// Count a redirect issued by the router labelled `source`.
pub fn record_redirect(source: &'static str) {
    ::metrics::counter!(REDIRECTS_TOTAL, "source" => source).increment(1);
}

/// Count a request the router labelled `source` did not match.
pub fn record_fallthrough(source: &'static str) {
    ::metrics::counter!(FALLTHROUGH_TOTAL, "source" => source).increment(1);
}

/// Install the Prometheus recorder and serve `/metrics` on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_recorded() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            record_redirect("table");
            record_redirect("table");
            record_fallthrough("document");
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"urlshort_redirects_total{source="table"} 2"#), "{rendered}");
        assert!(rendered.contains(r#"urlshort_fallthrough_total{source="document"} 1"#), "{rendered}");
    }
}
