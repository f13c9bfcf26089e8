//! Bakery handlers: list, read, partial update.

use crate::error::AppError;
use crate::extractors::OptionalFormBody;
use crate::model::BakeryForm;
use crate::response::success_ok;
use crate::service::{BakeryService, FormValidator};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub const BAKERY_NOT_FOUND: &str = "Bakery not found";

/// GET /bakeries
pub async fn list_bakeries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let bakeries = BakeryService::list(&state.pool).await?;
    Ok(success_ok(bakeries))
}

/// GET /bakeries/:id
pub async fn bakery_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let bakery = BakeryService::read(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(BAKERY_NOT_FOUND.into()))?;
    Ok(success_ok(bakery))
}

/// PATCH /bakeries/:id, form field `name` (optional; no form at all means no change).
pub async fn update_bakery(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    OptionalFormBody(form): OptionalFormBody<BakeryForm>,
) -> Result<impl IntoResponse, AppError> {
    let changes = FormValidator::bakery_changes(form);
    let bakery = BakeryService::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(BAKERY_NOT_FOUND.into()))?;
    Ok(success_ok(bakery))
}
