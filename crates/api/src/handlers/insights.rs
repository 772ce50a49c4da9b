//! Read-only pantry insights: expiry checks, healthier alternatives and the
//! missing-staples heuristic.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use pantry_core::alternatives::healthier_alternative;
use pantry_core::expiry::{expiring_soon_date, format_date};
use pantry_core::staples::suggest_staples;
use pantry_core::types::today;
use pantry_db::repositories::ItemRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Response for `GET /recommend/{name}`.
#[derive(Debug, Serialize)]
pub struct AlternativeResponse {
    pub alternative: &'static str,
}

/// GET /expiry
///
/// Items whose expiry is exactly seven days from today. Items expiring a
/// day earlier or later are not included.
pub async fn expiring_soon(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let target = format_date(expiring_soon_date(today()));
    let items = ItemRepo::list_by_expiry(&state.pool, &target).await?;

    tracing::debug!(%target, count = items.len(), "Expiring-soon lookup");

    Ok(Json(items))
}

/// GET /expired
///
/// Items with an expiry date of today or earlier.
pub async fn expired(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cutoff = format_date(today());
    let items = ItemRepo::list_expired(&state.pool, &cutoff).await?;

    tracing::debug!(%cutoff, count = items.len(), "Expired lookup");

    Ok(Json(items))
}

/// GET /recommend/{name}
pub async fn recommend(Path(name): Path<String>) -> Json<AlternativeResponse> {
    Json(AlternativeResponse {
        alternative: healthier_alternative(&name),
    })
}

/// GET /missing
///
/// Suggests staples when fewer than three items are stored.
pub async fn missing_staples(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = ItemRepo::count(&state.pool).await?;

    Ok(Json(suggest_staples(count)))
}
