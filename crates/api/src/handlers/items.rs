//! Handlers for listing items and adding items from a free-text prompt.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pantry_core::extraction::{parse_extraction, validate_prompt, Extraction, ResolvedItem};
use pantry_core::reconciliation::{missing_names, recent_window, reminder};
use pantry_core::types::{today, Date, DbId};
use pantry_db::models::item::CreateItem;
use pantry_db::repositories::{ItemListRepo, ItemRepo};
use pantry_db::DbPool;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /items`.
#[derive(Debug, Deserialize)]
pub struct AddItemsRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Summary returned by `POST /items`.
#[derive(Debug, Serialize)]
pub struct AddItemsResponse {
    pub message: &'static str,
    pub items_added: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<Date>,
    pub reminders: Vec<String>,
}

/// GET /items
///
/// Every stored item. Full scan, no pagination.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ItemRepo::list_all(&state.pool).await?;

    Ok(Json(items))
}

/// POST /items
///
/// Extract items from `prompt` with the language model, compute reminders
/// for items bought last week but missing today, and store the items as a
/// new list. No list is created when nothing was extracted; reminders are
/// returned either way.
pub async fn add_items(
    State(state): State<AppState>,
    payload: Result<Json<AddItemsRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let prompt = validate_prompt(input.prompt.as_deref())?;

    let raw = state.extractor.extract(prompt).await?;

    let items: Vec<ResolvedItem> = match parse_extraction(&raw) {
        Extraction::Success(parsed) => parsed.iter().map(|p| p.resolve()).collect(),
        Extraction::Empty => Vec::new(),
        Extraction::Malformed { raw, reason } => {
            tracing::warn!(%reason, raw_len = raw.len(), "Unparsable extraction output");
            return Err(AppError::BadRequest(format!(
                "Failed to parse items: {reason}"
            )));
        }
    };

    let today = today();
    let reminders = reminders_for(&state.pool, today, &items).await?;

    if items.is_empty() {
        tracing::info!(reminders = reminders.len(), "No items extracted from prompt");
        return Ok((
            StatusCode::OK,
            Json(AddItemsResponse {
                message: "No items found. Please add items.",
                items_added: 0,
                list_id: None,
                created_on: None,
                reminders,
            }),
        ));
    }

    let new_items: Vec<CreateItem> = items.into_iter().map(CreateItem::from).collect();
    let list = ItemListRepo::create_with_items(&state.pool, today, &new_items).await?;

    tracing::info!(
        list_id = list.id,
        count = new_items.len(),
        reminders = reminders.len(),
        "Items added",
    );

    Ok((
        StatusCode::CREATED,
        Json(AddItemsResponse {
            message: "Items added",
            items_added: new_items.len(),
            list_id: Some(list.id),
            created_on: Some(list.created_on),
            reminders,
        }),
    ))
}

/// Reminder sentences for names recorded in the week before `today` that
/// are absent from `items`. At most one sentence.
async fn reminders_for(
    pool: &DbPool,
    today: Date,
    items: &[ResolvedItem],
) -> Result<Vec<String>, sqlx::Error> {
    let (start, end) = recent_window(today);
    let recent = ItemRepo::names_created_between(pool, start, end).await?;

    let missing = missing_names(&recent, items.iter().map(|i| i.name.as_str()));

    Ok(reminder(&missing).into_iter().collect())
}
