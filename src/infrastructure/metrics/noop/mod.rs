mod noop_metrics;

pub use noop_metrics::NoopMetrics;
use std::sync::Arc;

/// Creates the no-op metrics backend (`APP_METRICS_TYPE` unset or not `prom`).
///
/// Every recording call is ignored and `render()` returns an empty string.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    Ok(Arc::new(NoopMetrics))
}
