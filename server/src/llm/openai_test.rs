use super::*;
use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;

fn timeouts() -> LlmTimeouts {
    LlmTimeouts { request_secs: 5, connect_secs: 5 }
}

fn options() -> ChatOptions {
    ChatOptions { max_tokens: 256, temperature: 0.7 }
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn spawn_mock(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

// ===== response parsing =====

#[test]
fn cc_parse_text_response() {
    let json = serde_json::json!({
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "Headline: Hello!" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 5 }
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "Headline: Hello!");
    assert_eq!(resp.model, "llama-3.3-70b-versatile");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 10);
    assert_eq!(resp.output_tokens, 5);
}

#[test]
fn cc_parse_length_finish_reason() {
    let json = serde_json::json!({
        "choices": [{ "message": { "content": "cut off" }, "finish_reason": "length" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.stop_reason, "max_tokens");
    assert_eq!(resp.input_tokens, 0);
    assert_eq!(resp.model, "");
}

#[test]
fn cc_parse_null_content_is_empty_text() {
    let json = serde_json::json!({
        "choices": [{ "message": { "content": null }, "finish_reason": "stop" }]
    })
    .to_string();
    let resp = parse_chat_completions_response(&json).unwrap();
    assert_eq!(resp.text, "");
}

#[test]
fn cc_parse_missing_choices() {
    let json = serde_json::json!({ "model": "m", "choices": [] }).to_string();
    assert!(matches!(parse_chat_completions_response(&json), Err(LlmError::ApiParse(_))));
}

#[test]
fn cc_parse_invalid_json() {
    assert!(matches!(parse_chat_completions_response("not json"), Err(LlmError::ApiParse(_))));
}

// ===== HTTP round-trip =====

#[tokio::test]
async fn chat_sends_bearer_and_body() {
    let router = axum::Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            assert_eq!(headers.get("authorization").and_then(|v| v.to_str().ok()), Some("Bearer gsk_test"));
            assert_eq!(body["model"], "test-model");
            assert_eq!(body["max_tokens"], 256);
            assert_eq!(body["messages"][0]["role"], "user");
            assert_eq!(body["messages"][0]["content"], "write a post");
            Json(serde_json::json!({
                "model": "test-model",
                "choices": [{ "message": { "content": "Headline: Hi" }, "finish_reason": "stop" }],
                "usage": { "prompt_tokens": 3, "completion_tokens": 2 }
            }))
        }),
    );
    let base_url = spawn_mock(router).await;

    let client = OpenAiClient::new("gsk_test".into(), format!("{base_url}/"), timeouts()).unwrap();
    let resp = client
        .chat("test-model", options(), &[Message::user("write a post")])
        .await
        .unwrap();
    assert_eq!(resp.text, "Headline: Hi");
    assert_eq!(resp.output_tokens, 2);
}

#[tokio::test]
async fn chat_maps_error_status() {
    let router = axum::Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::UNAUTHORIZED, "invalid api key") }),
    );
    let base_url = spawn_mock(router).await;

    let client = OpenAiClient::new("bad".into(), base_url, timeouts()).unwrap();
    let err = client
        .chat("test-model", options(), &[Message::user("hi")])
        .await
        .unwrap_err();
    match err {
        LlmError::ApiResponse { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid api key");
        }
        other => panic!("expected ApiResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_unreachable_host_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OpenAiClient::new("k".into(), format!("http://{addr}/v1"), timeouts()).unwrap();
    let err = client.chat("m", options(), &[Message::user("hi")]).await.unwrap_err();
    assert!(matches!(err, LlmError::ApiRequest(_)));
    assert!(err.retryable());
}
