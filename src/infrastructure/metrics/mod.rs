pub mod noop;
pub mod prometheus;

// Backend factories, selected at startup from `MetricsKind`
pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;
