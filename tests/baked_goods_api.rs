use axum::http::{Method, StatusCode};
use serde_json::json;

mod common;
use common::*;

#[tokio::test]
async fn by_price_sorts_highest_first() {
    let (app, _pool) = setup_test_app().await;
    let (status, body) = get_json(&app, "/baked_goods/by_price").await;

    assert_eq!(status, StatusCode::OK);
    let goods = body.as_array().unwrap();
    let prices: Vec<f64> = goods.iter().map(|g| g["price"].as_f64().unwrap()).collect();
    assert_eq!(prices, vec![3.0, 3.0, 3.0, 2.0]);
    assert_eq!(goods[3]["name"], "Chocolate dipped donut");
    assert_eq!(goods[0]["bakery"]["name"], "Delightful donuts");
    assert!(goods[0]["bakery"].get("baked_goods").is_none());
}

#[tokio::test]
async fn most_expensive_is_first_of_price_order() {
    let (app, _pool) = setup_test_app().await;
    let (_, listing) = get_json(&app, "/baked_goods/by_price").await;
    let (status, body) = get_json(&app, "/baked_goods/most_expensive").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, listing[0]);
    assert_eq!(body["price"].as_f64(), Some(3.0));
}

#[tokio::test]
async fn most_expensive_on_empty_store_is_404() {
    let (app, _pool) = setup_empty_app().await;
    let (status, body) = get_json(&app, "/baked_goods/most_expensive").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "No baked goods found" }));

    let (status, body) = get_json(&app, "/baked_goods/by_price").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_201_and_is_listed() {
    let (app, _pool) = setup_test_app().await;
    let (status, created) = form_json(
        &app,
        Method::POST,
        "/baked_goods",
        "name=Cinnamon+roll&price=4&bakery_id=1",
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Cinnamon roll");
    assert_eq!(created["price"].as_f64(), Some(4.0));
    assert_eq!(created["bakery_id"], 1);
    assert_eq!(created["bakery"]["id"], 1);

    let (_, listing) = get_json(&app, "/baked_goods/by_price").await;
    let found = listing
        .as_array()
        .unwrap()
        .iter()
        .find(|g| g["id"] == created["id"])
        .unwrap();
    assert_eq!(found["name"], "Cinnamon roll");
    assert_eq!(found["price"].as_f64(), Some(4.0));
    assert_eq!(found["bakery_id"], 1);

    let (_, bakery) = get_json(&app, "/bakeries/1").await;
    assert_eq!(bakery["baked_goods"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_with_bad_price_is_422_and_inserts_nothing() {
    let (app, pool) = setup_test_app().await;
    let (status, body) = form_json(
        &app,
        Method::POST,
        "/baked_goods",
        "name=Roll&price=cheap&bakery_id=1",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "price must be a number" }));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM baked_goods")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 4);
}

#[tokio::test]
async fn create_for_unknown_bakery_is_422() {
    let (app, _pool) = setup_test_app().await;
    let (status, body) = form_json(
        &app,
        Method::POST,
        "/baked_goods",
        "name=Roll&price=1&bakery_id=77",
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body, json!({ "error": "Bakery not found" }));
}

#[tokio::test]
async fn create_without_form_content_type_is_400() {
    let (app, _pool) = setup_test_app().await;
    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/baked_goods")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(r#"{"name":"Roll"}"#))
        .unwrap();
    let (status, body) = send_json(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn delete_removes_then_404s() {
    let (app, _pool) = setup_test_app().await;
    let (status, body) = delete_json(&app, "/baked_goods/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Baked good deleted" }));

    let (_, listing) = get_json(&app, "/baked_goods/by_price").await;
    assert!(listing.as_array().unwrap().iter().all(|g| g["id"] != 1));

    let (status, body) = delete_json(&app, "/baked_goods/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Baked good not found" }));
}

#[tokio::test]
async fn create_stores_name_exactly_as_submitted() {
    let (app, _pool) = setup_test_app().await;
    let (status, created) = form_json(
        &app,
        Method::POST,
        "/baked_goods",
        "name=+Cinnamon+roll+&price=4&bakery_id=1",
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], " Cinnamon roll ");
}
