//! Request context handed to business functions.
//!
//! Buffers the body up front so that decoding happens inside the business
//! function, where a malformed payload becomes an `ApiError` and therefore a
//! failure envelope instead of a bare axum rejection. The same holds for a
//! body that could not be read at all (over the size limit, aborted stream).

use crate::app_state::AppState;
use crate::envelope::{bad_request, ApiResult};
use axum::{
    body::Bytes,
    extract::{
        rejection::BytesRejection, FromRequest, FromRequestParts, Query, RawPathParams, Request,
    },
    http::{request::Parts, Method, Uri},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use std::str::FromStr;

/// Everything a route needs from one request.
pub struct RequestContext {
    // ---
    state: AppState,
    parts: Parts,
    path_params: Vec<(String, String)>,
    body: Result<Bytes, BytesRejection>,
}

impl FromRequest<AppState> for RequestContext {
    // ---
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        // ---
        let (mut parts, body) = req.into_parts();

        // Routes without parameters have nothing to extract.
        let path_params = RawPathParams::from_request_parts(&mut parts, state)
            .await
            .map(|params| {
                params
                    .iter()
                    .map(|(key, value)| (key.to_string(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        // Read failures surface from `read_body`, only for routes that need a body.
        let body = Bytes::from_request(Request::from_parts(parts.clone(), body), state).await;

        Ok(Self {
            state: state.clone(),
            parts,
            path_params,
            body,
        })
    }
}

impl RequestContext {
    // ---
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    /// Decodes the JSON body.
    ///
    /// An unreadable, empty or malformed body is a client error (400).
    pub fn read_body<T: DeserializeOwned>(&self) -> ApiResult<T> {
        // ---
        let body = self
            .body
            .as_ref()
            .map_err(|rejection| bad_request(rejection.body_text()))?;

        if body.is_empty() {
            return Err(bad_request("Request body is required"));
        }

        serde_json::from_slice(body)
            .map_err(|err| bad_request(format!("Invalid JSON body: {err}")))
    }

    /// Decodes the query string.
    pub fn query<T: DeserializeOwned>(&self) -> ApiResult<T> {
        // ---
        Query::<T>::try_from_uri(&self.parts.uri)
            .map(|Query(value)| value)
            .map_err(|rejection| bad_request(rejection.body_text()))
    }

    /// Parses the named path parameter (`/users/{id}` → `path_param("id")`).
    pub fn path_param<T: FromStr>(&self, name: &str) -> ApiResult<T> {
        // ---
        let raw = self
            .path_params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .ok_or_else(|| bad_request(format!("Missing path parameter `{name}`")))?;

        raw.parse()
            .map_err(|_| bad_request(format!("Invalid path parameter `{name}`: {raw}")))
    }
}
