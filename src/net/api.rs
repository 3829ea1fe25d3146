//! HTTP helpers for the assistant API.
//!
//! Client-side (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning [`ApiError::Network`] since these endpoints
//! are only reachable from the browser bundle.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse into two kinds: the request never produced a usable
//! response (`Network`), or the server answered with a non-2xx status and a
//! `detail` string (`Server`). Callers turn either into display text.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{ChatRequest, RawChatReply};
#[cfg(any(test, feature = "csr"))]
use super::types::ErrorBody;
use super::types::{ChatReply, GenerateDocumentReply, GenerateDocumentRequest};

/// Error text for a failed chat request whose body carries no `detail`.
pub const CHAT_FALLBACK_DETAIL: &str = "An unknown error occurred.";

/// Error text for a failed generation request whose body carries no `detail`.
pub const GENERATE_FALLBACK_DETAIL: &str = "Failed to generate document.";

/// Failure of a single API request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or an undecodable success body.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response; `detail` comes from the error body.
    #[error("{detail}")]
    Server { status: u16, detail: String },
}

pub fn chat_endpoint(base_url: &str) -> String {
    format!("{}/api/chat", base_url.trim_end_matches('/'))
}

pub fn generate_document_endpoint(base_url: &str) -> String {
    format!("{}/api/generate_document", base_url.trim_end_matches('/'))
}

/// Build a [`ApiError::Server`] from a non-2xx status and its raw body.
///
/// Bodies that are not JSON or lack a `detail` use `fallback`.
#[cfg(any(test, feature = "csr"))]
fn server_error(status: u16, body: &str, fallback: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail_text())
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Server { status, detail }
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Response, ApiError> {
    log::debug!("POST {url}");
    gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn read_server_error(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let err = server_error(status, &body, fallback);
    log::warn!("{} -> {status}: {err}", resp.url());
    err
}

/// Send one chat message via `POST /api/chat`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent or the reply is
/// not valid JSON, and [`ApiError::Server`] for a non-2xx status.
pub async fn send_chat(base_url: &str, message: &str) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = chat_endpoint(base_url);
        let body = ChatRequest { message: message.to_owned() };
        let resp = post_json(&url, &body).await.inspect_err(|e| log::warn!("chat request failed: {e}"))?;
        if !resp.ok() {
            return Err(read_server_error(resp, CHAT_FALLBACK_DETAIL).await);
        }
        let raw: RawChatReply = resp.json().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ChatReply::from(raw))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, message);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}

/// Fill a document template via `POST /api/generate_document`.
///
/// # Errors
///
/// Returns [`ApiError::Network`] if the request cannot be sent or the reply is
/// not valid JSON, and [`ApiError::Server`] for a non-2xx status.
pub async fn generate_document(
    base_url: &str,
    request: &GenerateDocumentRequest,
) -> Result<GenerateDocumentReply, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = generate_document_endpoint(base_url);
        let resp = post_json(&url, request)
            .await
            .inspect_err(|e| log::warn!("generate_document request failed: {e}"))?;
        if !resp.ok() {
            return Err(read_server_error(resp, GENERATE_FALLBACK_DETAIL).await);
        }
        resp.json::<GenerateDocumentReply>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (base_url, request);
        Err(ApiError::Network("not available outside the browser".to_owned()))
    }
}
