#![recursion_limit = "256"]

mod config;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server config");
    let port = config.port;

    // Initialize LLM client (non-fatal: generation returns 500 until a key is set).
    let mut chat_options = None;
    let llm = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            chat_options = Some(client.chat_options());
            Some(Arc::new(client) as Arc<dyn llm::LlmChat>)
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured; post generation disabled");
            None
        }
    };

    let mut state = state::AppState::new(config, llm);
    if let Some(options) = chat_options {
        state = state.with_chat_options(options);
    }

    let app = routes::leptos_app(state).expect("leptos configuration");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "content engine listening");
    axum::serve(listener, app).await.expect("server failed");
}
