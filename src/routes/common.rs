//! Common routes: home banner, health, readiness, version.

use crate::response::PrettyJson;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::Html, routing::get, Router};
use serde::Serialize;

pub const HOME_BANNER: &str = "<h1>Bakery GET-POST-PATCH-DELETE API</h1>";

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
}

async fn home() -> Html<&'static str> {
    Html(HOME_BANNER)
}

async fn health() -> PrettyJson<HealthBody> {
    PrettyJson(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, PrettyJson<ReadyBody>) {
    if let Err(err) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %err, "readiness check failed");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            PrettyJson(ReadyBody {
                status: "degraded",
                database: "unavailable",
            }),
        );
    }
    (
        StatusCode::OK,
        PrettyJson(ReadyBody {
            status: "ok",
            database: "ok",
        }),
    )
}

async fn version() -> PrettyJson<serde_json::Value> {
    PrettyJson(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET /, /health, /ready, /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
