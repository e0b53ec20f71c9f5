use crate::domain::Metrics;

/// Backend used when `APP_METRICS_TYPE` is not `prom`: records nothing,
/// renders an empty exposition.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl Metrics for NoopMetrics {
    fn render(&self) -> String {
        String::new()
    }
}
