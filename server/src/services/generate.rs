//! Generation service: request → prompt → LLM → parsed, checked post.
//!
//! DESIGN
//! ======
//! One LLM call per request. The reply is parsed with `services::parse`
//! and checked with `services::validation`; a failed check is logged and
//! the post is returned anyway. Image synthesis is not performed, so
//! `image_url` is always `None`.

use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use schema::{GenerationRequest, GenerationResult};

use super::parse::parse_post;
use super::prompt::assemble_prompt;
use super::validation::validate_post;
use crate::llm::types::{LlmError, Message};
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

/// Generate one post for `request`.
///
/// # Errors
///
/// Returns [`GenerateError::LlmNotConfigured`] when the server started
/// without an API key, or [`GenerateError::Llm`] when the call fails.
pub async fn generate_post(state: &AppState, request: &GenerationRequest) -> Result<GenerationResult, GenerateError> {
    let request_id = Uuid::new_v4();
    let category = request.brief.category();
    info!(%request_id, brand = %request.profile.name, %category, platform = %request.brief.platform, "generate: request received");

    let Some(llm) = state.llm.as_ref() else {
        warn!(%request_id, "generate: no LLM configured");
        return Err(GenerateError::LlmNotConfigured);
    };

    let prompt = assemble_prompt(&request.profile, &request.brief, request.instructions.as_ref());
    let response = llm
        .chat(state.chat_options, &[Message::user(prompt)])
        .await
        .inspect_err(|e| warn!(%request_id, error = %e, retryable = e.retryable(), "generate: LLM call failed"))?;
    info!(
        %request_id,
        model = %response.model,
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        stop_reason = %response.stop_reason,
        "generate: LLM reply received"
    );

    let post = parse_post(&response.text);
    if let Err(e) = validate_post(&post, &request.profile, category) {
        warn!(%request_id, error = %e, "generate: post failed content checks");
    }

    Ok(GenerationResult {
        headline: post.headline,
        caption: post.caption,
        cta: post.cta,
        hashtags: post.hashtags,
        design_prompt: post.design_prompt,
        image_url: None,
        cost_metadata: Some(json!({
            "status": "logged",
            "model": response.model,
            "input_tokens": response.input_tokens,
            "output_tokens": response.output_tokens,
        })),
    })
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;
