use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::common::test_app;

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn health_returns_200_with_provider_name() {
    let response = test_app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["provider"], "perplexity");
}

#[tokio::test]
async fn summarize_rejects_empty_input() {
    let response = test_app()
        .oneshot(post_json("/api/summarize", serde_json::json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("must be provided")
    );
}

#[tokio::test]
async fn summarize_rejects_foreign_url() {
    let body = serde_json::json!({"url": "https://example.com/questions/123456/x"});
    let response = test_app()
        .oneshot(post_json("/api/summarize", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().contains("StackOverflow"));
}

#[tokio::test]
async fn summarize_rejects_short_question() {
    let body = serde_json::json!({"question": "hi"});
    let response = test_app()
        .oneshot(post_json("/api/summarize", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = response_json(response).await;
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("at least 10 characters")
    );
}

#[tokio::test]
async fn chat_requires_message_field() {
    let response = test_app()
        .oneshot(post_json("/api/chat", serde_json::json!({"context": "prior"})))
        .await
        .unwrap();

    // Rejected by body deserialization before the handler runs.
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = test_app()
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = response_json(response).await;
    assert!(json["paths"]["/api/summarize"].is_object());
    assert!(json["paths"]["/api/chat"].is_object());
}
