use axum::body::{ to_bytes, Body };
use axum::http::{ header, Method, Request, StatusCode };
use serde_json::{ json, Value };
use std::sync::Arc;
use tower::ServiceExt;

use chat_relay::gateway::ChatGateway;
use chat_relay::llm::GenerationDefaults;
use chat_relay::llm::chat::{ BackendError, ChatBackend };
use chat_relay::llm::chat::echo::EchoBackend;
use chat_relay::models::chat::Conversation;
use chat_relay::server::api::{ router, AppState };

struct FailingBackend;

#[async_trait::async_trait]
impl ChatBackend for FailingBackend {
    async fn generate(
        &self,
        _conversation: &Conversation,
        _model: &str,
        _temperature: f32
    ) -> Result<String, BackendError> {
        Err(BackendError::MalformedResponse("upstream timed out".into()))
    }
}

fn echo_app() -> axum::Router {
    app_with(Arc::new(EchoBackend::new()))
}

fn app_with(backend: Arc<dyn ChatBackend>) -> axum::Router {
    let gateway = Arc::new(ChatGateway::new(backend, GenerationDefaults::default()));
    router(AppState { gateway })
}

async fn send_chat(app: axum::Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn chat_echoes_a_single_user_message() {
    let (status, body) = send_chat(
        echo_app(),
        json!({ "messages": [{ "role": "user", "content": "hello" }] })
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Echo: hello" }));
}

#[tokio::test]
async fn chat_replies_to_the_most_recent_user_turn() {
    let (status, body) = send_chat(
        echo_app(),
        json!({
            "messages": [
                { "role": "user", "content": "hi" },
                { "role": "assistant", "content": "yo" },
                { "role": "user", "content": "bye" },
            ],
        })
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Echo: bye" }));
}

#[tokio::test]
async fn empty_conversation_is_a_client_error() {
    let (status, body) = send_chat(echo_app(), json!({ "messages": [] })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("at least one message"));
}

#[tokio::test]
async fn unknown_role_is_a_client_error() {
    let (status, body) = send_chat(
        echo_app(),
        json!({ "messages": [{ "role": "moderator", "content": "stop" }] })
    ).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("unknown role 'moderator'"));
}

#[tokio::test]
async fn out_of_range_temperature_is_a_client_error() {
    let (status, body) = send_chat(
        echo_app(),
        json!({
            "messages": [{ "role": "user", "content": "hello" }],
            "temperature": 2.5,
        })
    ).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("temperature"));
}

#[tokio::test]
async fn explicit_model_and_temperature_are_accepted() {
    let (status, body) = send_chat(
        echo_app(),
        json!({
            "messages": [{ "role": "user", "content": "hello" }],
            "model": "gpt-4o",
            "temperature": 1.5,
        })
    ).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Echo: hello" }));
}

#[tokio::test]
async fn backend_failure_is_a_server_error() {
    let (status, body) = send_chat(
        app_with(Arc::new(FailingBackend)),
        json!({ "messages": [{ "role": "user", "content": "hello" }] })
    ).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["detail"].as_str().unwrap().contains("upstream timed out"));
}

#[tokio::test]
async fn liveness_probe_responds_without_business_logic() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = echo_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = echo_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
