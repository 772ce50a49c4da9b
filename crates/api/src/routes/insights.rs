use axum::routing::get;
use axum::Router;

use crate::handlers::insights;
use crate::state::AppState;

/// Insight routes.
///
/// ```text
/// GET    /expiry            -> expiring_soon
/// GET    /expired           -> expired
/// GET    /recommend/{name}  -> recommend
/// GET    /missing           -> missing_staples
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expiry", get(insights::expiring_soon))
        .route("/expired", get(insights::expired))
        .route("/recommend/{name}", get(insights::recommend))
        .route("/missing", get(insights::missing_staples))
}
