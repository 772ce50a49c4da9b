//! Item models and DTOs.

use pantry_core::extraction::ResolvedItem;
use pantry_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Item {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub list_id: DbId,
    pub name: String,
    /// Free text; the model does not guarantee a number.
    pub qty: String,
    /// Stored verbatim, usually `YYYY-MM-DD`, possibly empty.
    pub expiry: String,
}

/// DTO for inserting an item into a new list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItem {
    pub name: String,
    pub qty: String,
    pub expiry: String,
}

impl From<ResolvedItem> for CreateItem {
    fn from(item: ResolvedItem) -> Self {
        Self {
            name: item.name,
            qty: item.qty,
            expiry: item.expiry,
        }
    }
}
