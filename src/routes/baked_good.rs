//! Static segments (`by_price`, `most_expensive`) take priority over `:id`.

use crate::handlers::baked_good::{
    baked_goods_by_price, create_baked_good, delete_baked_good, most_expensive_baked_good,
};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn baked_good_routes(state: AppState) -> Router {
    Router::new()
        .route("/baked_goods", post(create_baked_good))
        .route("/baked_goods/by_price", get(baked_goods_by_price))
        .route("/baked_goods/most_expensive", get(most_expensive_baked_good))
        .route("/baked_goods/:id", delete(delete_baked_good))
        .with_state(state)
}
