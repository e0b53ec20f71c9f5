use metrics::{counter, histogram};
use std::time::Instant;

/// Increment a counter for created users.
pub fn increment_user_created() {
    counter!("users_created_total").increment(1);
}

/// Track HTTP request latency and count, labelled by route and outcome.
pub fn track_http_request(start: Instant, path: &str, method: &str, status: u16) {
    let elapsed = start.elapsed();
    let path = path.to_string();
    let method = method.to_string();
    let status = status.to_string();

    counter!(
        "http_requests_total",
        "path" => path.clone(),
        "method" => method.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "path" => path,
        "method" => method,
        "status" => status
    )
    .record(elapsed);
}
