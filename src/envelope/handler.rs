//! Higher-order handler wrappers.
//!
//! Both wrappers take a business function `Fn(C) -> Future<Output = Result<T, _>>`
//! and return a closure axum accepts as a handler whenever `C` is an
//! extractor. The context `C` is handed to the business function untouched.

use std::future::Future;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use super::error::ApiError;
use super::response::ApiResponse;

/// Message used when a failure has nothing safe to show and no
/// `error_message` is configured.
pub const DEFAULT_ERROR_MESSAGE: &str = "Operation failed";

/// Per-route envelope settings.
#[derive(Debug, Clone, Default)]
pub struct HandlerOptions {
    /// Added to the success envelope as `message`.
    pub success_message: Option<String>,

    /// Used for failures that carry no client-facing message.
    pub error_message: Option<String>,
}

impl HandlerOptions {
    // ---
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        // ---
        self.success_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        // ---
        self.error_message = Some(message.into());
        self
    }

    fn wrap_success<T>(&self, data: T) -> ApiResponse<T> {
        // ---
        ApiResponse::success(data, self.success_message.clone())
    }

    /// Converts a failure into an envelope, logging what was swallowed.
    fn wrap_failure<T>(&self, err: ApiError) -> ApiResponse<T> {
        // ---
        match &err {
            ApiError::Business { status, message } => {
                tracing::warn!(status = status.as_u16(), %message, "Handler returned business error");
            }
            ApiError::Unexpected(cause) => {
                tracing::error!(error = ?cause, "Handler failed unexpectedly");
            }
        }

        let message = err
            .public_message()
            .or(self.error_message.as_deref())
            .unwrap_or(DEFAULT_ERROR_MESSAGE);

        ApiResponse::failure(message)
    }
}

/// Wraps `handler` so that every outcome becomes an envelope.
///
/// Success yields `{success: true, data}` (plus `message` when a success
/// message is configured). Any `ApiError` is swallowed and rendered as
/// `{success: false, message}`; the returned future never fails.
pub fn define_api_handler<C, T, F, Fut>(
    handler: F,
    options: HandlerOptions,
) -> impl Fn(C) -> BoxFuture<'static, ApiResponse<T>> + Clone + Send + Sync + 'static
where
    C: Send + 'static,
    T: Send + 'static,
    F: Fn(C) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, ApiError>> + Send + 'static,
{
    let options = Arc::new(options);

    move |ctx: C| {
        let outcome = handler(ctx);
        let options = Arc::clone(&options);

        async move {
            match outcome.await {
                Ok(data) => options.wrap_success(data),
                Err(err) => options.wrap_failure(err),
            }
        }
        .boxed()
    }
}

/// Wraps `handler` on the success path only.
///
/// Errors are handed back to the caller unchanged, so axum renders them
/// through the error type's own `IntoResponse`. Meant for logic with no
/// fallible I/O.
pub fn define_simple_handler<C, T, E, F, Fut>(
    handler: F,
    options: HandlerOptions,
) -> impl Fn(C) -> BoxFuture<'static, Result<ApiResponse<T>, E>> + Clone + Send + Sync + 'static
where
    C: Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    F: Fn(C) -> Fut + Clone + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    let options = Arc::new(options);

    move |ctx: C| {
        let outcome = handler(ctx);
        let options = Arc::clone(&options);

        async move { outcome.await.map(|data| options.wrap_success(data)) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::envelope::{bad_request, not_found};
    use serde_json::{json, Value};

    fn to_json<T: serde::Serialize>(response: &ApiResponse<T>) -> Value {
        serde_json::to_value(response).expect("envelope serializes")
    }

    async fn alice(_: ()) -> Result<Value, ApiError> {
        Ok(json!({"id": 1, "name": "Alice"}))
    }

    async fn missing_fields(_: ()) -> Result<Value, ApiError> {
        Err(bad_request("name and email are required"))
    }

    async fn broken_lookup(_: ()) -> Result<Value, ApiError> {
        Err(anyhow::anyhow!("relation \"users\" does not exist").into())
    }

    #[tokio::test]
    async fn success_without_options() {
        // ---
        let handler = define_api_handler(alice, HandlerOptions::new());
        let response = handler(()).await;

        assert_eq!(
            to_json(&response),
            json!({"success": true, "data": {"id": 1, "name": "Alice"}})
        );
    }

    #[tokio::test]
    async fn success_with_message() {
        // ---
        let handler = define_api_handler(
            |n: u32| async move { Ok::<_, ApiError>(n * 2) },
            HandlerOptions::new().success_message("M"),
        );

        assert_eq!(
            to_json(&handler(21).await),
            json!({"success": true, "data": 42, "message": "M"})
        );
    }

    #[tokio::test]
    async fn business_message_wins_over_error_message() {
        // ---
        let handler = define_api_handler(
            missing_fields,
            HandlerOptions::new().error_message("Failed to create user"),
        );

        assert_eq!(
            to_json(&handler(()).await),
            json!({"success": false, "message": "name and email are required"})
        );
    }

    #[tokio::test]
    async fn unexpected_failure_uses_error_message() {
        // ---
        let handler = define_api_handler(
            broken_lookup,
            HandlerOptions::new().error_message("lookup failed"),
        );

        assert_eq!(
            to_json(&handler(()).await),
            json!({"success": false, "message": "lookup failed"})
        );
    }

    #[tokio::test]
    async fn unexpected_failure_without_options_uses_default() {
        // ---
        let handler = define_api_handler(broken_lookup, HandlerOptions::new());

        assert_eq!(
            to_json(&handler(()).await),
            json!({"success": false, "message": DEFAULT_ERROR_MESSAGE})
        );
    }

    #[tokio::test]
    async fn failure_ignores_success_message() {
        // ---
        let handler = define_api_handler(
            |_: ()| async { Err::<Value, _>(not_found()) },
            HandlerOptions::new().success_message("Created successfully"),
        );

        let response = handler(()).await;
        assert!(!response.is_success());
        assert_eq!(response.message(), Some("Resource not found"));
        assert!(to_json(&response).get("data").is_none());
    }

    #[tokio::test]
    async fn context_is_passed_through() {
        // ---
        let handler = define_api_handler(
            |ctx: (String, u8)| async move { Ok::<_, ApiError>(ctx) },
            HandlerOptions::new(),
        );

        let response = handler(("ctx".to_string(), 9)).await;
        assert_eq!(response.into_data(), Some(("ctx".to_string(), 9)));
    }

    #[tokio::test]
    async fn wrapped_handler_is_reusable() {
        // ---
        let handler = define_api_handler(alice, HandlerOptions::new());
        let cloned = handler.clone();

        assert!(handler(()).await.is_success());
        assert!(cloned(()).await.is_success());
    }

    #[tokio::test]
    async fn simple_handler_wraps_success() {
        // ---
        let handler = define_simple_handler(
            |_: ()| async { Ok::<_, ApiError>(json!({"name": "John Doe"})) },
            HandlerOptions::new(),
        );

        let response = handler(()).await.expect("simple handler succeeds");
        assert_eq!(
            to_json(&response),
            json!({"success": true, "data": {"name": "John Doe"}})
        );
    }

    #[tokio::test]
    async fn simple_handler_applies_success_message() {
        // ---
        let handler = define_simple_handler(
            |_: ()| async { Ok::<_, ApiError>(1) },
            HandlerOptions::new().success_message("ok"),
        );

        let response = handler(()).await.expect("simple handler succeeds");
        assert_eq!(response.message(), Some("ok"));
    }

    #[tokio::test]
    async fn simple_handler_propagates_errors() {
        // ---
        let handler = define_simple_handler(
            missing_fields,
            HandlerOptions::new().error_message("never used"),
        );

        let err = handler(()).await.expect_err("error must propagate");
        assert_eq!(err.public_message(), Some("name and email are required"));
    }
}
