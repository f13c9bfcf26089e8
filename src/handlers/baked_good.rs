//! Baked-good handlers: price listings, create, delete.

use crate::error::AppError;
use crate::extractors::FormBody;
use crate::model::BakedGoodForm;
use crate::response::{success_created, success_message, success_ok};
use crate::service::{BakedGoodService, FormValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const BAKED_GOOD_NOT_FOUND: &str = "Baked good not found";
pub const NO_BAKED_GOODS: &str = "No baked goods found";

/// GET /baked_goods/by_price
pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let goods = BakedGoodService::list_by_price(&state.pool).await?;
    Ok(success_ok(goods))
}

/// GET /baked_goods/most_expensive
pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let good = BakedGoodService::most_expensive(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(NO_BAKED_GOODS.into()))?;
    Ok(success_ok(good))
}

/// POST /baked_goods, form fields `name`, `price`, `bakery_id`.
pub async fn create_baked_good(
    State(state): State<AppState>,
    FormBody(form): FormBody<BakedGoodForm>,
) -> Result<impl IntoResponse, AppError> {
    let new = FormValidator::new_baked_good(form)?;
    let created = BakedGoodService::create(&state.pool, &new).await?;
    Ok(success_created(created))
}

/// DELETE /baked_goods/:id
pub async fn delete_baked_good(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    if !BakedGoodService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(BAKED_GOOD_NOT_FOUND.into()));
    }
    Ok(success_message("Baked good deleted"))
}
