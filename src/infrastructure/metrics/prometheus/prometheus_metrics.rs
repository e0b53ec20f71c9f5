//! Prometheus metrics implementation.
//!
//! Implements the `Metrics` trait on top of the global `metrics` crate
//! registry. Recording goes through `counters.rs`, rendering through the
//! handle kept in `recorder.rs`.

use crate::domain::Metrics;
use std::time::Instant;

/// Prometheus-based metrics implementation.
///
/// Holds no state of its own: metrics are registered globally on first use
/// via `counter!()` / `histogram!()`.
pub struct PrometheusMetrics {}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_user_created(&self) {
        tracing::debug!("Recording user created event");
        super::increment_user_created();
    }

    fn record_http_request(&self, start: Instant, path: &str, method: &str, status: u16) {
        super::track_http_request(start, path, method, status);
    }
}
