//! Chat calls against an in-process stand-in for the Ollama service.

use std::time::Duration;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use ollama_client::{ChatRequest, Message, OllamaClient, OllamaError};
use serde_json::{json, Value};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_chat_returns_message_content() {
    let router = Router::new().route(
        "/api/chat",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["stream"], false);
            let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
            Json(json!({
                "model": body["model"],
                "message": {"role": "assistant", "content": format!("echo: {prompt}")},
                "done": true,
                "eval_count": 7
            }))
        }),
    );
    let client = OllamaClient::new(spawn(router).await);

    let response = client
        .chat(ChatRequest::new("llama3.1:latest").message(Message::user("hello")))
        .await
        .unwrap();

    assert_eq!(response.content, "echo: hello");
    assert_eq!(response.model, "llama3.1:latest");
    assert_eq!(response.eval_count, Some(7));
}

#[tokio::test]
async fn test_missing_model_is_reported() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "model \"nope\" not found, try pulling it first"})),
            )
        }),
    );
    let client = OllamaClient::new(spawn(router).await);

    let err = client.generate("nope", "hi").await.unwrap_err();
    assert!(matches!(err, OllamaError::ModelNotFound(ref m) if m == "nope"), "{err:?}");
}

#[tokio::test]
async fn test_body_without_message_is_malformed() {
    let router = Router::new().route("/api/chat", post(|| async { Json(json!({"done": true})) }));
    let client = OllamaClient::new(spawn(router).await);

    let err = client.generate("llama3.1:latest", "hi").await.unwrap_err();
    assert!(matches!(err, OllamaError::Malformed(_)), "{err:?}");
}

#[tokio::test]
async fn test_unreachable_service() {
    // Bind then drop to get a port nothing is listening on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = OllamaClient::new(format!("http://{}", addr));
    let err = client.generate("llama3.1:latest", "hi").await.unwrap_err();
    assert!(matches!(err, OllamaError::Unreachable(_)), "{err:?}");
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let router = Router::new().route(
        "/api/chat",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({"message": {"role": "assistant", "content": "late"}}))
        }),
    );
    let client = OllamaClient::new(spawn(router).await).with_timeout(Duration::from_millis(200));

    let err = client.generate("llama3.1:latest", "hi").await.unwrap_err();
    assert!(matches!(err, OllamaError::Timeout(_)), "{err:?}");
}

#[tokio::test]
async fn test_list_models() {
    let router = Router::new().route(
        "/api/tags",
        get(|| async {
            Json(json!({
                "models": [
                    {"name": "llama3.1:latest", "size": 4661224676u64},
                    {"name": "mistral:7b"}
                ]
            }))
        }),
    );
    let client = OllamaClient::new(spawn(router).await);

    let names: Vec<String> = client
        .list_models()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(names, vec!["llama3.1:latest", "mistral:7b"]);
}
