//! Repository for the `items` table.

use pantry_core::types::Date;
use sqlx::SqlitePool;

use crate::models::item::Item;

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = "id, list_id, name, qty, expiry";

/// Provides read access to stored items.
pub struct ItemRepo;

impl ItemRepo {
    /// Every stored item, oldest first. No pagination.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY id");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Total number of stored items.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Items whose stored expiry text equals `expiry` exactly.
    pub async fn list_by_expiry(pool: &SqlitePool, expiry: &str) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE expiry = ?1 ORDER BY id");
        sqlx::query_as::<_, Item>(&query)
            .bind(expiry)
            .fetch_all(pool)
            .await
    }

    /// Items with a non-empty expiry on or before `cutoff`.
    ///
    /// Compares text, which orders correctly for `YYYY-MM-DD` values only.
    pub async fn list_expired(pool: &SqlitePool, cutoff: &str) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE expiry <> '' AND expiry <= ?1 \
             ORDER BY expiry, id"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(cutoff)
            .fetch_all(pool)
            .await
    }

    /// Names of items on lists created between `start` and `end`, inclusive.
    pub async fn names_created_between(
        pool: &SqlitePool,
        start: Date,
        end: Date,
    ) -> Result<Vec<String>, sqlx::Error> {
        let rows: Vec<(String,)> = sqlx::query_as(
            "SELECT i.name FROM items i \
             JOIN item_lists l ON l.id = i.list_id \
             WHERE l.created_on BETWEEN ?1 AND ?2",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }
}
