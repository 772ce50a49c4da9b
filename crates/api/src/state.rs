use std::sync::Arc;

use pantry_gemini::ItemExtractor;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Handlers borrow a pooled connection per query; nothing holds a session
/// across requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pantry_db::DbPool,
    /// Language-model item extractor.
    pub extractor: Arc<dyn ItemExtractor>,
}
