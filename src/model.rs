//! Bakery and baked-good records, their JSON shapes, and the raw form inputs.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of `bakeries`.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// A row of `baked_goods`. Serialized as-is inside a bakery's `baked_goods` list.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Bakery with its baked goods nested (goods do not repeat the bakery).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakeryDetail {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}

/// Baked good with its owning bakery nested (the bakery does not repeat its goods).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedGoodDetail {
    #[serde(flatten)]
    pub baked_good: BakedGood,
    pub bakery: Bakery,
}

/// Baked good joined with its bakery in one row.
#[derive(Debug, FromRow)]
pub struct BakedGoodRow {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub bakery_name: String,
    pub bakery_created_at: NaiveDateTime,
    pub bakery_updated_at: NaiveDateTime,
}

impl From<BakedGoodRow> for BakedGoodDetail {
    fn from(row: BakedGoodRow) -> Self {
        BakedGoodDetail {
            bakery: Bakery {
                id: row.bakery_id,
                name: row.bakery_name,
                created_at: row.bakery_created_at,
                updated_at: row.bakery_updated_at,
            },
            baked_good: BakedGood {
                id: row.id,
                name: row.name,
                price: row.price,
                bakery_id: row.bakery_id,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
        }
    }
}

/// Form fields of `POST /baked_goods`, untyped as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BakedGoodForm {
    pub name: Option<String>,
    pub price: Option<String>,
    pub bakery_id: Option<String>,
}

/// Form fields of `PATCH /bakeries/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BakeryForm {
    pub name: Option<String>,
}

/// Validated input for inserting a baked good.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: i64,
}

/// Validated partial update of a bakery. `None` leaves the field unchanged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BakeryChanges {
    pub name: Option<String>,
}
