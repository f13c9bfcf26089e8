//! Bakery queries. Bakeries are always returned with their baked goods nested.

use crate::error::AppError;
use crate::model::{BakedGood, Bakery, BakeryChanges, BakeryDetail};
use sqlx::SqlitePool;
use std::collections::HashMap;

const SELECT_BAKERY: &str = "SELECT id, name, created_at, updated_at FROM bakeries";
const SELECT_BAKED_GOOD: &str =
    "SELECT id, name, price, bakery_id, created_at, updated_at FROM baked_goods";

pub struct BakeryService;

impl BakeryService {
    /// Every bakery ordered by id. Two queries: bakeries, then all baked goods grouped in memory.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<BakeryDetail>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_BAKERY);
        tracing::debug!(sql = %sql, "query");
        let bakeries: Vec<Bakery> = sqlx::query_as(&sql).fetch_all(pool).await?;

        let sql = format!("{} ORDER BY bakery_id, id", SELECT_BAKED_GOOD);
        tracing::debug!(sql = %sql, "query");
        let goods: Vec<BakedGood> = sqlx::query_as(&sql).fetch_all(pool).await?;

        let mut by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
        for good in goods {
            by_bakery.entry(good.bakery_id).or_default().push(good);
        }

        Ok(bakeries
            .into_iter()
            .map(|bakery| {
                let baked_goods = by_bakery.remove(&bakery.id).unwrap_or_default();
                BakeryDetail {
                    bakery,
                    baked_goods,
                }
            })
            .collect())
    }

    /// Bakery row only.
    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Bakery>, AppError> {
        let sql = format!("{} WHERE id = ?", SELECT_BAKERY);
        tracing::debug!(sql = %sql, id, "query");
        let bakery = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        Ok(bakery)
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<BakeryDetail>, AppError> {
        let Some(bakery) = Self::find(pool, id).await? else {
            return Ok(None);
        };
        let sql = format!("{} WHERE bakery_id = ? ORDER BY id", SELECT_BAKED_GOOD);
        tracing::debug!(sql = %sql, id, "query");
        let baked_goods = sqlx::query_as(&sql).bind(id).fetch_all(pool).await?;
        Ok(Some(BakeryDetail {
            bakery,
            baked_goods,
        }))
    }

    /// Apply a partial update. `None` when the bakery does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        changes: &BakeryChanges,
    ) -> Result<Option<BakeryDetail>, AppError> {
        if Self::find(pool, id).await?.is_none() {
            return Ok(None);
        }
        if let Some(name) = &changes.name {
            let now = chrono::Utc::now().naive_utc();
            sqlx::query("UPDATE bakeries SET name = ?, updated_at = ? WHERE id = ?")
                .bind(name)
                .bind(now)
                .bind(id)
                .execute(pool)
                .await?;
            tracing::info!(id, name = %name, "bakery renamed");
        }
        Self::read(pool, id).await
    }
}
