//! Post generation route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use schema::{GenerationRequest, GenerationResult};

use crate::services::generate::{self, GenerateError};
use crate::state::AppState;

pub const GENERATION_FAILED_DETAIL: &str = "Failed to generate text content.";

/// `POST /generate-post`: generate one post from a profile and brief.
///
/// Malformed bodies are rejected by the `Json` extractor (422 for schema
/// errors, 400 for invalid JSON).
pub async fn generate_post(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, Response> {
    generate::generate_post(&state, &request)
        .await
        .map(Json)
        .map_err(generate_error_response)
}

fn generate_error_response(err: GenerateError) -> Response {
    tracing::error!(error = %err, "generate-post failed");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": GENERATION_FAILED_DETAIL }))).into_response()
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
