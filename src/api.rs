//! HTTP client for the live API preview
//!
//! One POST per submission, JSON in and out, no retry and no auth header:
//! the bearer token shown in the preview panel is display-only.

use gloo_net::http::Request;
use serde_json::Value;

/// Fixed origin for all preview requests.
pub const API_BASE: &str = "https://prism.optical-labs.ca";

/// POST the request body to an endpoint and parse the JSON response.
pub async fn post_preview(endpoint: &str, body: &Value) -> Result<Value, String> {
    let url = format!("{}/{}", API_BASE, endpoint);
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize body: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
