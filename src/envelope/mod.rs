//! Uniform response envelope.
//!
//! Route logic is written as plain `async fn(ctx) -> ApiResult<T>` and
//! wrapped with [`define_api_handler`] (errors become failure envelopes) or
//! [`define_simple_handler`] (errors propagate to axum). Failures are raised
//! with the typed constructors below.

mod error;
mod handler;
mod response;

pub use error::{
    bad_request, forbidden, not_found, server_error, unauthorized, ApiError, ApiResult,
};
pub use handler::{define_api_handler, define_simple_handler, HandlerOptions, DEFAULT_ERROR_MESSAGE};
pub use response::ApiResponse;
