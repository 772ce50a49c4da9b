pub mod health;
pub mod insights;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /items                  list, add from prompt (GET, POST)
/// /expiry                 items expiring in exactly seven days (GET)
/// /expired                items expired on or before today (GET)
/// /recommend/{name}       healthier alternative (GET)
/// /missing                staple suggestions (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .merge(insights::router())
}
