use axum::routing::get;
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes.
///
/// ```text
/// GET    /items             -> list_items
/// POST   /items             -> add_items
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/items", get(items::list_items).post(items::add_items))
}
