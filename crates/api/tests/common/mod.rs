#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pantry_api::config::{GeminiConfig, ServerConfig};
use pantry_api::router::build_app_router;
use pantry_api::state::AppState;
use pantry_db::DbPool;
use pantry_gemini::{GeminiError, ItemExtractor};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "sqlite::memory:".to_string(),
        gemini: GeminiConfig {
            api_key: "test-key".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
    }
}

/// A fresh, migrated in-memory database.
pub async fn test_pool() -> DbPool {
    let pool = pantry_db::create_memory_pool().await.unwrap();
    pantry_db::run_migrations(&pool).await.unwrap();
    pool
}

// ---------------------------------------------------------------------------
// Extractor doubles
// ---------------------------------------------------------------------------

/// Extractor that returns a fixed model response and records every prompt.
pub struct CannedExtractor {
    response: String,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl CannedExtractor {
    pub fn new(response: &str) -> Arc<Self> {
        Arc::new(Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ItemExtractor for CannedExtractor {
    async fn extract(&self, prompt: &str) -> Result<String, GeminiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Extractor whose upstream always fails.
pub struct FailingExtractor;

#[async_trait::async_trait]
impl ItemExtractor for FailingExtractor {
    async fn extract(&self, _prompt: &str) -> Result<String, GeminiError> {
        Err(GeminiError::Api {
            status: 503,
            body: "model overloaded".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with all middleware layers.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app(pool: DbPool, extractor: Arc<dyn ItemExtractor>) -> Router {
    let config = test_config();
    let state = AppState { pool, extractor };
    build_app_router(state, &config)
}

/// App whose extractor finds nothing.
pub fn build_default_app(pool: DbPool) -> Router {
    build_test_app(pool, CannedExtractor::new("[]"))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
