//! HTTP API Wrappers
//!
//! Frontend bindings to the cart backend and the public weather service.

mod cart;
mod weather;

use serde::de::DeserializeOwned;

pub use cart::*;
pub use weather::*;

/// Errors from any HTTP call
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if let Some(status) = e.status() {
            ApiError::Status(status.as_u16())
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// Join a base prefix and an endpoint path with exactly one slash
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Full URL for an endpoint. Origin-relative bases are resolved against the
/// current page, which `reqwest` needs on wasm.
pub(crate) fn endpoint_url(base: &str, path: &str) -> String {
    let url = join_url(base, path);
    if url.starts_with('/') {
        if let Some(origin) = page_origin() {
            return format!("{}{}", origin, url);
        }
    }
    url
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

/// Send cookies with same-origin requests
#[cfg(target_arch = "wasm32")]
pub(crate) fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn with_credentials(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
}

async fn send(builder: reqwest::RequestBuilder) -> ApiResult<reqwest::Response> {
    let response = builder.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response)
}

pub(crate) async fn send_json<T: DeserializeOwned>(builder: reqwest::RequestBuilder) -> ApiResult<T> {
    let response = send(builder).await?;
    response.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub(crate) async fn send_empty(builder: reqwest::RequestBuilder) -> ApiResult<()> {
    send(builder).await.map(|_| ())
}
