//! REST helper for the registration endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): returns [`ApiError::Unavailable`] since the request is
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The caller gets a `Result` instead of a panic; the submit path only logs
//! it, so a failed request never disturbs the form.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::RegistrationInput;

/// Failure of an outbound registration request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Request could not be built or sent, or the body could not be read.
    #[error("registration request failed: {0}")]
    Request(String),
    /// Server answered with a non-2xx status.
    #[error("registration rejected: {0}")]
    Status(u16),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// `POST` the registration payload as JSON to `url`.
///
/// Returns the raw response body on a 2xx status.
///
/// # Errors
///
/// Returns [`ApiError::Request`] on transport failure, [`ApiError::Status`] on
/// a non-2xx response, and [`ApiError::Unavailable`] outside the browser.
pub async fn post_registration(url: &str, input: &RegistrationInput) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(input)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !is_success_status(resp.status()) {
            return Err(ApiError::Status(resp.status()));
        }
        resp.text().await.map_err(|e| ApiError::Request(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("skipping POST {url} for {:?} outside the browser", input.name);
        Err(ApiError::Unavailable)
    }
}
