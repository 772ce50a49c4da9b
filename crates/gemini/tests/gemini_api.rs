//! Tests for `GeminiClient` against a local stub of the Gemini API.

use assert_matches::assert_matches;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pantry_gemini::{GeminiClient, GeminiError, ItemExtractor};
use serde_json::{json, Value};

/// Serve `app` on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Stub that echoes what it received inside a well-formed response.
async fn echo_handler(
    Path(model_action): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let prompt = body["contents"][0]["parts"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    Json(json!({
        "candidates": [{
            "content": {
                "parts": [
                    { "text": format!("{model_action}|{key}|") },
                    { "text": prompt }
                ]
            }
        }]
    }))
}

#[tokio::test]
async fn extract_sends_instruction_key_and_model() {
    let base = serve(Router::new().route("/v1beta/models/{model_action}", post(echo_handler))).await;
    let client = GeminiClient::new("secret-key".into(), base);

    let raw = client.extract("bought 2 milk").await.unwrap();

    let mut fields = raw.splitn(3, '|');
    assert_eq!(fields.next(), Some("gemini-2.5-flash-lite:generateContent"));
    assert_eq!(fields.next(), Some("secret-key"));
    let prompt = fields.next().unwrap();
    assert!(prompt.starts_with("Extract all food and grocery items"));
    assert!(prompt.ends_with("User Request: \"bought 2 milk\""));
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let app = Router::new().route(
        "/v1beta/models/{model_action}",
        post(|| async { (StatusCode::FORBIDDEN, "API key invalid") }),
    );
    let client = GeminiClient::new("bad".into(), serve(app).await);

    let err = client.extract("eggs").await.unwrap_err();

    assert_matches!(err, GeminiError::Api { status: 403, body } => {
        assert_eq!(body, "API key invalid");
    });
}

#[tokio::test]
async fn response_without_candidates_is_empty_response() {
    let app = Router::new().route(
        "/v1beta/models/{model_action}",
        post(|| async { Json(json!({ "candidates": [] })) }),
    );
    let client = GeminiClient::new("k".into(), serve(app).await);

    assert_matches!(client.extract("eggs").await, Err(GeminiError::EmptyResponse));
}

#[tokio::test]
async fn unreachable_host_is_request_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = GeminiClient::new("k".into(), format!("http://{addr}"));

    assert_matches!(client.extract("eggs").await, Err(GeminiError::Request(_)));
}
