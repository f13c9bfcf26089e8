use crate::handlers::bakery::{bakery_by_id, list_bakeries, update_bakery};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bakery_routes(state: AppState) -> Router {
    Router::new()
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(bakery_by_id).patch(update_bakery))
        .with_state(state)
}
