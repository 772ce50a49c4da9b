//! Repository for the `item_lists` table.

use pantry_core::types::{Date, DbId};
use sqlx::SqlitePool;

use crate::models::item::CreateItem;
use crate::models::item_list::ItemList;

/// Column list for `item_lists` queries.
const LIST_COLUMNS: &str = "id, created_on";

/// Provides creation and removal of item lists.
pub struct ItemListRepo;

impl ItemListRepo {
    /// Create a list dated `created_on` together with all of its items.
    ///
    /// Runs in one transaction: either the list and every item are stored,
    /// or nothing is.
    pub async fn create_with_items(
        pool: &SqlitePool,
        created_on: Date,
        items: &[CreateItem],
    ) -> Result<ItemList, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query =
            format!("INSERT INTO item_lists (created_on) VALUES (?1) RETURNING {LIST_COLUMNS}");
        let list = sqlx::query_as::<_, ItemList>(&query)
            .bind(created_on)
            .fetch_one(&mut *tx)
            .await?;

        for item in items {
            sqlx::query("INSERT INTO items (list_id, name, qty, expiry) VALUES (?1, ?2, ?3, ?4)")
                .bind(list.id)
                .bind(&item.name)
                .bind(&item.qty)
                .bind(&item.expiry)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        tracing::debug!(list_id = list.id, count = items.len(), "Item list stored");

        Ok(list)
    }

    /// Delete a list; its items go with it. Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM item_lists WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
