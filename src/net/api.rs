//! REST calls for the sign-in and sign-up forms.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`], since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! The host answers rejected credentials with a non-2xx status *and* a JSON
//! outcome body, so the status code is never inspected. Only a failed send or
//! an unparseable body is an error here; a parsed `success: false` is a normal
//! return value.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginRequest, SignupRequest, SubmissionOutcome};

/// Reasons an auth request produced no usable [`SubmissionOutcome`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request body could not be encoded: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("response body is not a valid outcome: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

/// Parse a raw response body into a [`SubmissionOutcome`].
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body is not a JSON outcome.
pub fn decode_outcome(body: &str) -> Result<SubmissionOutcome, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Sign in via `POST /api/login`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request could not complete or the response
/// body could not be parsed.
pub async fn login(request: &LoginRequest) -> Result<SubmissionOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(crate::config::LOGIN_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /api/signup`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request could not complete or the response
/// body could not be parsed.
pub async fn signup(request: &SignupRequest) -> Result<SubmissionOutcome, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(crate::config::SIGNUP_ENDPOINT, request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<SubmissionOutcome, ApiError> {
    // `.json()` sets `Content-Type: application/json`.
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let text = resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_outcome(&text)
}
