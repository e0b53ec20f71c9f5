use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::response::ApiResponse;

pub(crate) const DEFAULT_UNAUTHORIZED: &str = "Unauthorized";
pub(crate) const DEFAULT_FORBIDDEN: &str = "Forbidden";
pub(crate) const DEFAULT_NOT_FOUND: &str = "Resource not found";
pub(crate) const DEFAULT_SERVER_ERROR: &str = "Internal server error";

/// Error raised by business logic running inside a wrapped handler.
///
/// `Business` errors are expected outcomes whose message is safe to show to
/// clients. `Unexpected` errors wrap whatever went wrong underneath (I/O,
/// database, decoding) and their text is only ever logged.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An intentional failure with a status code and a client-facing message.
    #[error("{message}")]
    Business { status: StatusCode, message: String },

    /// Any other failure. The cause is kept for logging.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Convenience type alias for business function results.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    // ---
    /// Builds a business error with an arbitrary status.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        // ---
        ApiError::Business {
            status,
            message: message.into(),
        }
    }

    /// Replaces the message of a business error, keeping its status.
    ///
    /// Used with the defaulted constructors, e.g.
    /// `not_found().with_message("User not found")`. Unexpected errors are
    /// returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        // ---
        match self {
            ApiError::Business { status, .. } => ApiError::Business {
                status,
                message: message.into(),
            },
            unexpected => unexpected,
        }
    }

    /// Status code carried by the error.
    ///
    /// Unexpected errors report 500. The envelope produced by
    /// `define_api_handler` never uses this value for the transport status.
    pub fn status(&self) -> StatusCode {
        // ---
        match self {
            ApiError::Business { status, .. } => *status,
            ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message that may be shown to a client, if any.
    pub fn public_message(&self) -> Option<&str> {
        // ---
        match self {
            ApiError::Business { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Unexpected(err.into())
    }
}

/// Rendering used when an `ApiError` reaches the framework directly, which
/// only happens through `define_simple_handler`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // ---
        let status = self.status();
        let message = match self.public_message() {
            Some(message) => message.to_string(),
            None => {
                tracing::error!(error = ?self, "Unhandled error reached the framework");
                DEFAULT_SERVER_ERROR.to_string()
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

/// 400 Bad Request.
pub fn bad_request(message: impl Into<String>) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, message)
}

/// 401 Unauthorized with the default message.
pub fn unauthorized() -> ApiError {
    ApiError::new(StatusCode::UNAUTHORIZED, DEFAULT_UNAUTHORIZED)
}

/// 403 Forbidden with the default message.
pub fn forbidden() -> ApiError {
    ApiError::new(StatusCode::FORBIDDEN, DEFAULT_FORBIDDEN)
}

/// 404 Not Found with the default message.
pub fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, DEFAULT_NOT_FOUND)
}

/// 500 Internal Server Error with the default message.
pub fn server_error() -> ApiError {
    ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, DEFAULT_SERVER_ERROR)
}
