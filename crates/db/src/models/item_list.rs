//! Item list model.

use pantry_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `item_lists` table: one processed shopping prompt.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ItemList {
    pub id: DbId,
    pub created_on: Date,
}
