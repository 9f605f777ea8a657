//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional LLM client, the sampling settings sent with every
//! call, and the server config. Cloning is cheap.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::llm::LlmChat;
use crate::llm::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::llm::types::ChatOptions;

#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if no API key is configured.
    pub llm: Option<Arc<dyn LlmChat>>,
    pub chat_options: ChatOptions,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, llm: Option<Arc<dyn LlmChat>>) -> Self {
        Self {
            llm,
            chat_options: ChatOptions { max_tokens: DEFAULT_MAX_TOKENS, temperature: DEFAULT_TEMPERATURE },
            config: Arc::new(config),
        }
    }

    #[must_use]
    pub fn with_chat_options(mut self, options: ChatOptions) -> Self {
        self.chat_options = options;
        self
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
