//! Shared test helpers: an app over a seeded in-memory store, and request shortcuts.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use bakery_api::{app_router, apply_migrations, memory_pool, seed_if_empty, AppState};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

pub const BODY_LIMIT: usize = 64 * 1024;

/// Router plus its pool, with the demo rows inserted.
pub async fn setup_test_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await.unwrap();
    apply_migrations(&pool).await.unwrap();
    seed_if_empty(&pool).await.unwrap();
    (app_router(AppState::new(pool.clone()), BODY_LIMIT), pool)
}

/// Router over a store with tables but no rows.
pub async fn setup_empty_app() -> (Router, SqlitePool) {
    let pool = memory_pool().await.unwrap();
    apply_migrations(&pool).await.unwrap();
    (app_router(AppState::new(pool.clone()), BODY_LIMIT), pool)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, request).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send_json(app, request).await
}

pub async fn form_json(app: &Router, method: Method, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send_json(app, request).await
}

pub async fn delete_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send_json(app, request).await
}
