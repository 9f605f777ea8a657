use super::*;
use crate::config::ServerConfig;
use crate::state::test_helpers::{self, MockLlm};
use axum::body::{self, Body};
use axum::http::Request;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

const REPLY: &str = "Headline: Open Late\nCaption: Now until ten.\nCTA: Drop by\nHashtags: #late #open\nIMAGE PROMPT: Neon sign";

fn request_value(brand: &str, category: &str) -> Value {
    json!({
        "profile": {
            "name": brand,
            "industry": "Food",
            "primary_service": "Bread",
            "target_audience": "Locals",
            "tone": "Warm",
            "phone": "555-0100",
            "cta": "Visit us"
        },
        "brief": {
            "platform": "Instagram",
            "topic": "Late hours",
            "content_category": category,
            "festival_name": null,
            "festival_type": null,
            "cta_enabled": false
        }
    })
}

fn body_json(brand: &str, category: &str) -> String {
    request_value(brand, category).to_string()
}

fn post_generate(body: String) -> Request<Body> {
    Request::post("/generate-post")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .expect("request")
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_is_ok() {
    let app = app(test_helpers::test_app_state());
    let response = app
        .oneshot(Request::get("/healthz").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn generate_post_returns_result_json() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm::replying(REPLY)));
    let response = app(state)
        .oneshot(post_generate(body_json("Acme", "Service Promotion")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let value = read_json(response).await;
    assert_eq!(value["headline"], "Open Late");
    assert_eq!(value["caption"], "Now until ten.");
    assert_eq!(value["cta"], "Drop by");
    assert_eq!(value["hashtags"], json!(["late", "open"]));
    assert_eq!(value["design_prompt"], "Neon sign");
    assert_eq!(value["image_url"], Value::Null);
    assert_eq!(value["cost_metadata"]["status"], "logged");
}

#[tokio::test]
async fn generate_post_without_llm_returns_detail() {
    let response = app(test_helpers::test_app_state())
        .oneshot(post_generate(body_json("Acme", "Educational")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(read_json(response).await, json!({ "detail": "Failed to generate text content." }));
}

#[tokio::test]
async fn generate_post_rejects_unknown_category() {
    let state = test_helpers::test_app_state_with_llm(Arc::new(MockLlm::replying(REPLY)));
    let response = app(state)
        .oneshot(post_generate(body_json("Acme", "Cat Pictures")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("unknown variant `Cat Pictures`"), "{text}");
}

#[tokio::test]
async fn generate_post_rejects_missing_category() {
    let mut value = request_value("Acme", "Educational");
    value["brief"].as_object_mut().expect("brief object").remove("content_category");
    let response = app(test_helpers::test_app_state())
        .oneshot(post_generate(value.to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn generate_post_festival_brief_reaches_prompt() {
    let mock = Arc::new(MockLlm::replying(REPLY));
    let state = test_helpers::test_app_state_with_llm(mock.clone());
    let mut value = request_value("Acme", "Festival / Occasion");
    value["brief"]["festival_name"] = json!("Diwali");
    value["brief"]["festival_type"] = json!("Religious");
    value["brief"]["cta_enabled"] = json!(true);

    let response = app(state)
        .oneshot(post_generate(value.to_string()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await["headline"], "Open Late");

    let prompts = mock.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Content Category: Festival / Occasion"));
    assert!(prompts[0].contains("Festival Name: Diwali"));
    assert!(prompts[0].contains("Festival Type: Religious"));
    assert!(prompts[0].contains("CTA Enabled: Yes"));
}

#[tokio::test]
async fn generate_post_rejects_invalid_json() {
    let response = app(test_helpers::test_app_state())
        .oneshot(post_generate("{not json".into()))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::post("/generate-post")
        .header("origin", "http://example.test")
        .header("content-type", "application/json")
        .body(Body::from(body_json("Acme", "Educational")))
        .expect("request");
    let response = app(test_helpers::test_app_state()).oneshot(request).await.expect("response");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn output_files_are_served() {
    let dir = std::env::temp_dir().join(format!("content-engine-output-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    std::fs::write(dir.join("post.png"), b"png-bytes").expect("write");

    let config = ServerConfig { output_dir: dir.clone(), ..ServerConfig::default() };
    let app = app(crate::state::AppState::new(config, None));
    let response = app
        .oneshot(Request::get("/output/post.png").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    assert_eq!(bytes.as_ref(), b"png-bytes");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn missing_output_file_is_not_found() {
    let response = app(test_helpers::test_app_state())
        .oneshot(Request::get("/output/nope.png").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
