use std::sync::Arc;
use std::time::Instant;

/// Observability hooks called from handlers and the request middleware.
///
/// Recording methods default to doing nothing so a backend only overrides
/// what it actually exports. `render` produces the body of `GET /metrics`.
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Current metrics in Prometheus text format; empty when nothing is exported.
    fn render(&self) -> String;

    /// A row was inserted by `POST /users`.
    fn record_user_created(&self) {}

    /// One routed request finished. `path` is the route template, not the raw URI.
    fn record_http_request(&self, _start: Instant, _path: &str, _method: &str, _status: u16) {}
}

pub type MetricsPtr = Arc<dyn Metrics>;
