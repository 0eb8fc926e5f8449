//! HTTP endpoint integration tests

use crate::support::{backend_config, dispatcher};
use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use idea_gen_gateway::api::routes::create_router;
use idea_gen_gateway::config::{ProtocolType, Settings};
use idea_gen_gateway::AppState;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct TestApp {
    router: Router,
    primary: MockServer,
    secondary: MockServer,
}

async fn test_app() -> TestApp {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;
    let d = dispatcher(
        backend_config("open-webui", ProtocolType::OpenAI, &primary),
        backend_config("ollama", ProtocolType::Ollama, &secondary),
    );
    let state = AppState::with_dispatcher(Settings::default(), d).unwrap();

    TestApp {
        router: create_router(Arc::new(state)),
        primary,
        secondary,
    }
}

fn generate_request(form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_generate_with_primary() {
    let app = test_app().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "Idea1...Idea2...Idea3..."}}]
        })))
        .expect(1)
        .mount(&app.primary)
        .await;

    let response = app
        .router
        .oneshot(generate_request(
            "niche=remote+work+productivity&num_ideas=3&include_outline=true&tone=professional&model=gemma2%3A2b",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"generated_ideas": "Idea1...Idea2...Idea3..."})
    );
}

#[tokio::test]
async fn test_generate_both_backends_fail() {
    let app = test_app().await;
    Mock::given(method("POST"))
        .and(path("/api/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.primary)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.secondary)
        .await;

    let response = app
        .router
        .oneshot(generate_request("niche=home+gardening"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        json_body(response).await,
        json!({"detail": "Failed to generate content from available LLMs"})
    );
}

#[tokio::test]
async fn test_invalid_niche_never_reaches_backends() {
    let app = test_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.primary)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.secondary)
        .await;

    let response = app
        .router
        .oneshot(generate_request("niche=ab&num_ideas=3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert!(body["detail"].as_str().unwrap().contains("niche"));
}

#[tokio::test]
async fn test_num_ideas_out_of_range_rejected() {
    let app = test_app().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.primary)
        .await;

    let response = app
        .router
        .oneshot(generate_request("niche=travel+tips&num_ideas=11"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_niche_rejected() {
    let app = test_app().await;

    let response = app
        .router
        .oneshot(generate_request("num_ideas=3"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["detail"].is_string());
}

#[tokio::test]
async fn test_models_endpoint_defaults_when_backends_down() {
    let app = test_app().await;

    let response = app.router.oneshot(get("/models")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, json!({"models": ["gemma2:2b"]}));
}

#[tokio::test]
async fn test_index_renders_form() {
    let app = test_app().await;

    let response = app.router.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("<form"));
    assert!(html.contains("gemma2:2b"));
}

#[tokio::test]
async fn test_health_lists_backends_in_order() {
    let app = test_app().await;

    let response = app.router.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backends"][0]["name"], "open-webui");
    assert_eq!(body["backends"][0]["protocol"], "openai");
    assert_eq!(body["backends"][1]["name"], "ollama");
}
