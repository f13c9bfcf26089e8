//! Demo data inserted on first startup: two bakeries and four baked goods.

use crate::error::AppError;
use sqlx::SqlitePool;

pub const SEED_BAKERIES: &[&str] = &["Delightful donuts", "Incredible crullers"];

/// (name, price, index into `SEED_BAKERIES`)
pub const SEED_BAKED_GOODS: &[(&str, f64, usize)] = &[
    ("Chocolate dipped donut", 2.0, 0),
    ("Apple-spice filled donut", 3.0, 0),
    ("Glazed honey cruller", 3.0, 1),
    ("Chocolate cruller", 3.0, 1),
];

/// Insert the seed rows when `bakeries` is empty. Returns whether anything was inserted.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, AppError> {
    let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM bakeries LIMIT 1")
        .fetch_optional(pool)
        .await?;
    if existing.is_some() {
        tracing::debug!("store already has bakeries; skipping seed");
        return Ok(false);
    }

    let now = chrono::Utc::now().naive_utc();
    let mut tx = pool.begin().await?;

    let mut bakery_ids = Vec::with_capacity(SEED_BAKERIES.len());
    for name in SEED_BAKERIES {
        let id = sqlx::query("INSERT INTO bakeries (name, created_at, updated_at) VALUES (?, ?, ?)")
            .bind(*name)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        bakery_ids.push(id);
    }

    for (name, price, bakery) in SEED_BAKED_GOODS {
        sqlx::query(
            "INSERT INTO baked_goods (name, price, bakery_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*name)
        .bind(*price)
        .bind(bakery_ids[*bakery])
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    tracing::info!(
        bakeries = SEED_BAKERIES.len(),
        baked_goods = SEED_BAKED_GOODS.len(),
        "seeded empty store"
    );
    Ok(true)
}
