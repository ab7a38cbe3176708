//! Task API Gateway
//!
//! Fetch wrappers for the remote task API, organized by endpoint group.

mod auth;
mod task;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use auth::*;
pub use task::*;

/// API origin, fixed at build time like any public frontend setting
fn api_base() -> &'static str {
    option_env!("TASKS_API_URL").unwrap_or("http://localhost:8000")
}

/// Gateway failure surfaced to the calling component
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Missing or rejected session token; callers redirect to login
    #[error("not authenticated")]
    Unauthorized,
    /// Any other non-success response
    #[error("request failed with status {0}")]
    Status(u16),
    /// Fetch or (de)serialization failure before a status was available
    #[error("network error: {0}")]
    Network(String),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        ApiError::Network(format!("{value:?}"))
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Network(e.to_string()))
}

/// Issue one request and map the response status. Fire-and-report: no
/// retries, no timeout beyond the browser default.
async fn send(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<Response, ApiError> {
    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    if let Some(token) = token {
        headers.set("Authorization", &format!("Bearer {token}"))?;
    }
    if body.is_some() {
        headers.set("Content-Type", "application/json")?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    match response.status() {
        200..=299 => Ok(response),
        401 | 403 => Err(ApiError::Unauthorized),
        status => Err(ApiError::Status(status)),
    }
}

/// `send`, then parse the JSON body
async fn send_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<String>,
) -> Result<T, ApiError> {
    let response = send(method, path, token, body).await?;
    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}
