//! Create the `bakeries` and `baked_goods` tables. Idempotent; safe on every startup.

use crate::error::AppError;
use sqlx::SqlitePool;

/// DDL in dependency order: `baked_goods` references `bakeries`.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        price REAL NOT NULL,
        bakery_id INTEGER NOT NULL REFERENCES bakeries (id),
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
        updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_baked_goods_bakery_id ON baked_goods (bakery_id)",
    "CREATE INDEX IF NOT EXISTS idx_baked_goods_price ON baked_goods (price)",
];

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in SCHEMA {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!(statements = SCHEMA.len(), "schema ready");
    Ok(())
}
