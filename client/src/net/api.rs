//! REST helper for the content-generation endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning [`GenerateError::Unavailable`] since the
//! request is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (encode, network, non-2xx status, body parse) is a
//! [`GenerateError`]. Callers treat all variants the same way; the variant
//! only carries detail for the diagnostic log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use schema::{GenerationRequest, GenerationResult};

/// Endpoint that turns a profile + brief into generated content.
pub const GENERATE_ENDPOINT: &str = "/generate-post";

/// A failed generation round-trip.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("generation failed: could not encode request: {0}")]
    Encode(String),
    #[error("generation failed: network error: {0}")]
    Network(String),
    #[error("generation failed: server returned status {0}")]
    Status(u16),
    #[error("generation failed: invalid response body: {0}")]
    Parse(String),
    #[error("generation failed: not available on server")]
    Unavailable,
}

/// `POST /generate-post` with `request` as JSON and parse the result.
///
/// # Errors
///
/// Returns a [`GenerateError`] if the request cannot be sent, the server
/// answers with a non-success status, or the body is not a valid result.
pub async fn generate_post(request: GenerationRequest) -> Result<GenerationResult, GenerateError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .json(&request)
            .map_err(|e| GenerateError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GenerateError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(GenerateError::Status(resp.status()));
        }
        resp.json::<GenerationResult>()
            .await
            .map_err(|e| GenerateError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(GenerateError::Unavailable)
    }
}
