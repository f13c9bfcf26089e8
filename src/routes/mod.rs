//! Router builders and the composed application router.

mod baked_good;
mod bakery;
mod common;

pub use baked_good::baked_good_routes;
pub use bakery::bakery_routes;
pub use common::{common_routes, HOME_BANNER};

use crate::state::AppState;
use axum::Router;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// All routes with request tracing and a body size limit.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(bakery_routes(state.clone()))
        .merge(baked_good_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}
