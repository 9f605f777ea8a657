//! LLM: chat client used by the generation service.
//!
//! DESIGN
//! ======
//! `LlmClient` wraps an OpenAI-compatible chat completions client configured
//! from environment variables. Services depend on the `LlmChat` trait so
//! tests can substitute a mock.

pub mod config;
pub mod openai;
pub mod types;

use config::LlmConfig;
pub use types::LlmChat;
use types::{ChatOptions, ChatResponse, LlmError, Message};

// =============================================================================
// CLIENT
// =============================================================================

/// Concrete LLM client, configured by [`LlmClient::from_env`].
pub struct LlmClient {
    inner: openai::OpenAiClient,
    model: String,
    options: ChatOptions,
}

impl LlmClient {
    /// Build an LLM client from environment variables (see [`LlmConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing, a value is malformed, or
    /// the HTTP client fails to build.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = LlmConfig::from_env()?;
        tracing::debug!(key = %config.masked_key(), base_url = %config.base_url, "llm: config loaded");
        Self::from_config(config)
    }

    /// Build an LLM client from a parsed typed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn from_config(config: LlmConfig) -> Result<Self, LlmError> {
        let options = ChatOptions { max_tokens: config.max_tokens, temperature: config.temperature };
        let inner = openai::OpenAiClient::new(config.api_key, config.base_url, config.timeouts)?;
        Ok(Self { inner, model: config.model, options })
    }

    /// Return the configured model name (e.g. `"llama-3.3-70b-versatile"`).
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling settings taken from the config.
    #[must_use]
    pub fn chat_options(&self) -> ChatOptions {
        self.options
    }
}

#[async_trait::async_trait]
impl LlmChat for LlmClient {
    async fn chat(&self, options: ChatOptions, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        self.inner.chat(&self.model, options, messages).await
    }
}
