use axum::response::{IntoResponse, Response};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Uniform JSON envelope returned by every API route.
///
/// Serializes to `{ "success": bool, "message"?: string, "data"?: T }`.
/// Being a sum type, a failure can never carry `data`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { data: T, message: Option<String> },
    Failure { message: String },
}

impl<T> ApiResponse<T> {
    // ---
    pub fn success(data: T, message: Option<String>) -> Self {
        // ---
        ApiResponse::Success { data, message }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        // ---
        ApiResponse::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }

    pub fn message(&self) -> Option<&str> {
        // ---
        match self {
            ApiResponse::Success { message, .. } => message.as_deref(),
            ApiResponse::Failure { message } => Some(message.as_str()),
        }
    }

    pub fn data(&self) -> Option<&T> {
        // ---
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }

    pub fn into_data(self) -> Option<T> {
        // ---
        match self {
            ApiResponse::Success { data, .. } => Some(data),
            ApiResponse::Failure { .. } => None,
        }
    }
}

impl<T: Serialize> Serialize for ApiResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // ---
        match self {
            ApiResponse::Success { data, message } => {
                let len = if message.is_some() { 3 } else { 2 };
                let mut state = serializer.serialize_struct("ApiResponse", len)?;
                state.serialize_field("success", &true)?;
                match message {
                    Some(message) => state.serialize_field("message", message)?,
                    None => state.skip_field("message")?,
                }
                state.serialize_field("data", data)?;
                state.end()
            }
            ApiResponse::Failure { message } => {
                let mut state = serializer.serialize_struct("ApiResponse", 2)?;
                state.serialize_field("success", &false)?;
                state.serialize_field("message", message)?;
                state.skip_field("data")?;
                state.end()
            }
        }
    }
}

/// The envelope always travels with `200 OK`; clients read `success`.
impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn success_without_message_omits_key() {
        // ---
        let value = serde_json::to_value(ApiResponse::success(json!({"id": 1}), None)).unwrap();
        assert_eq!(value, json!({"success": true, "data": {"id": 1}}));
        assert!(value.get("message").is_none());
    }

    #[test]
    fn success_with_message() {
        // ---
        let value = serde_json::to_value(ApiResponse::success(7, Some("M".into()))).unwrap();
        assert_eq!(value, json!({"success": true, "data": 7, "message": "M"}));
    }

    #[test]
    fn failure_has_no_data_key() {
        // ---
        let value = serde_json::to_value(ApiResponse::<u32>::failure("E")).unwrap();
        assert_eq!(value, json!({"success": false, "message": "E"}));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn null_payload_is_still_present() {
        // ---
        let value = serde_json::to_value(ApiResponse::success((), None)).unwrap();
        assert_eq!(value, json!({"success": true, "data": null}));
    }

    #[test]
    fn accessors() {
        // ---
        let ok = ApiResponse::success("v", Some("done".into()));
        assert!(ok.is_success());
        assert_eq!(ok.message(), Some("done"));
        assert_eq!(ok.data(), Some(&"v"));

        let failed = ApiResponse::<&str>::failure("nope");
        assert!(!failed.is_success());
        assert_eq!(failed.message(), Some("nope"));
        assert_eq!(failed.into_data(), None);
    }

    #[test]
    fn failure_is_sent_with_ok_status() {
        // ---
        let response = ApiResponse::<()>::failure("E").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
