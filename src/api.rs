//! Remote Data Gateway
//!
//! Issues the two read-only fetches against the public API and joins them
//! before enrichment. Either request failing fails the whole load; the
//! error banner's Retry reloads the page rather than re-running a single
//! fetch.

use futures::future::join;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::models::{Post, User};

/// Base URL of the public demo API
pub const API_BASE: &str = "https://jsonplaceholder.typicode.com";

/// Classified failure of the initial load
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("Request failed: {code} {text}")]
    Status { code: u16, text: String },
    /// The request went out but no response came back
    #[error("The server is not responding. Check your connection and try again.")]
    Unreachable,
    /// A response arrived but its body was not the expected shape
    #[error("Received an unexpected response from the server.")]
    Decode(String),
}

async fn get_json(url: &str) -> Result<JsValue, ApiError> {
    let window = web_sys::window().ok_or(ApiError::Unreachable)?;
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|_| ApiError::Unreachable)?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Unreachable)?;

    if !response.ok() {
        return Err(ApiError::Status {
            code: response.status(),
            text: response.status_text(),
        });
    }

    let body = response
        .json()
        .map_err(|err| ApiError::Decode(format!("{:?}", err)))?;
    JsFuture::from(body)
        .await
        .map_err(|err| ApiError::Decode(format!("{:?}", err)))
}

pub async fn fetch_posts(base: &str) -> Result<Vec<Post>, ApiError> {
    let value = get_json(&format!("{}/posts", base)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

pub async fn fetch_users(base: &str) -> Result<Vec<User>, ApiError> {
    let value = get_json(&format!("{}/users", base)).await?;
    serde_wasm_bindgen::from_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

/// Fetch both collections concurrently and await the pair.
///
/// Partial success is not a state: posts without users (or the reverse)
/// surfaces as the first error in request order.
pub async fn fetch_gallery(base: &str) -> Result<(Vec<Post>, Vec<User>), ApiError> {
    let (posts, users) = join(fetch_posts(base), fetch_users(base)).await;
    Ok((posts?, users?))
}
