//! Baked-good queries. Each baked good is returned with its bakery nested.

use crate::error::AppError;
use crate::model::{BakedGoodDetail, BakedGoodRow, NewBakedGood};
use crate::service::BakeryService;
use sqlx::SqlitePool;

const SELECT_DETAIL: &str = r#"
    SELECT bg.id, bg.name, bg.price, bg.bakery_id, bg.created_at, bg.updated_at,
           b.name AS bakery_name, b.created_at AS bakery_created_at, b.updated_at AS bakery_updated_at
    FROM baked_goods bg
    JOIN bakeries b ON b.id = bg.bakery_id
"#;

/// Highest price first; equal prices keep insertion order.
const BY_PRICE_DESC: &str = "ORDER BY bg.price DESC, bg.id ASC";

pub struct BakedGoodService;

impl BakedGoodService {
    pub async fn list_by_price(pool: &SqlitePool) -> Result<Vec<BakedGoodDetail>, AppError> {
        let sql = format!("{} {}", SELECT_DETAIL, BY_PRICE_DESC);
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<BakedGoodRow> = sqlx::query_as(&sql).fetch_all(pool).await?;
        Ok(rows.into_iter().map(BakedGoodDetail::from).collect())
    }

    /// First row of the price ordering, `None` on an empty table.
    pub async fn most_expensive(pool: &SqlitePool) -> Result<Option<BakedGoodDetail>, AppError> {
        let sql = format!("{} {} LIMIT 1", SELECT_DETAIL, BY_PRICE_DESC);
        tracing::debug!(sql = %sql, "query");
        let row: Option<BakedGoodRow> = sqlx::query_as(&sql).fetch_optional(pool).await?;
        Ok(row.map(BakedGoodDetail::from))
    }

    pub async fn read(pool: &SqlitePool, id: i64) -> Result<Option<BakedGoodDetail>, AppError> {
        let sql = format!("{} WHERE bg.id = ?", SELECT_DETAIL);
        tracing::debug!(sql = %sql, id, "query");
        let row: Option<BakedGoodRow> = sqlx::query_as(&sql).bind(id).fetch_optional(pool).await?;
        Ok(row.map(BakedGoodDetail::from))
    }

    /// Insert and return the created record. The owning bakery must exist.
    pub async fn create(pool: &SqlitePool, new: &NewBakedGood) -> Result<BakedGoodDetail, AppError> {
        if BakeryService::find(pool, new.bakery_id).await?.is_none() {
            return Err(AppError::Validation("Bakery not found".into()));
        }
        let now = chrono::Utc::now().naive_utc();
        let id = sqlx::query(
            "INSERT INTO baked_goods (name, price, bakery_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(new.price)
        .bind(new.bakery_id)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?
        .last_insert_rowid();
        tracing::info!(id, name = %new.name, bakery_id = new.bakery_id, "baked good created");

        Self::read(pool, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    /// Remove by id. Returns whether a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(id, "baked good deleted");
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::migration::apply_migrations;
    use crate::seed::seed_if_empty;
    use crate::store::memory_pool;

    async fn empty() -> SqlitePool {
        let pool = memory_pool().await.unwrap();
        apply_migrations(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn cheapest_seeded_good_sorts_last() {
        let pool = empty().await;
        seed_if_empty(&pool).await.unwrap();
        let goods = BakedGoodService::list_by_price(&pool).await.unwrap();
        let prices: Vec<f64> = goods.iter().map(|g| g.baked_good.price).collect();
        assert_eq!(prices, vec![3.0, 3.0, 3.0, 2.0]);
        assert_eq!(goods[3].baked_good.name, "Chocolate dipped donut");
        let ids: Vec<i64> = goods[..3].iter().map(|g| g.baked_good.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[tokio::test]
    async fn most_expensive_on_empty_table_is_none() {
        let pool = empty().await;
        assert!(BakedGoodService::most_expensive(&pool).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_then_delete() {
        let pool = empty().await;
        seed_if_empty(&pool).await.unwrap();
        let created = BakedGoodService::create(
            &pool,
            &NewBakedGood {
                name: "Cinnamon roll".into(),
                price: 4.0,
                bakery_id: 1,
            },
        )
        .await
        .unwrap();
        assert_eq!(created.baked_good.name, "Cinnamon roll");
        assert_eq!(created.bakery.id, 1);

        let top = BakedGoodService::most_expensive(&pool).await.unwrap().unwrap();
        assert_eq!(top.baked_good.id, created.baked_good.id);

        assert!(BakedGoodService::delete(&pool, created.baked_good.id).await.unwrap());
        assert!(!BakedGoodService::delete(&pool, created.baked_good.id).await.unwrap());
        assert!(BakedGoodService::read(&pool, created.baked_good.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn create_for_unknown_bakery_is_rejected() {
        let pool = empty().await;
        let err = BakedGoodService::create(
            &pool,
            &NewBakedGood {
                name: "Orphan".into(),
                price: 1.0,
                bakery_id: 7,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Bakery not found"));
    }
}
