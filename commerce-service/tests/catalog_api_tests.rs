mod common;

use common::product;
use common::TestApp;
use common::CATALOG_SIZE;
use reqwest::StatusCode;

async fn get_json(app: &TestApp, path: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .get(path)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_list_products_defaults() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["data"][0]["id"], 1);
    assert_eq!(body["pagination"]["current_page"], 1);
    assert_eq!(body["pagination"]["items_per_page"], 10);
    assert_eq!(body["pagination"]["total_items"], CATALOG_SIZE);
    assert_eq!(body["pagination"]["total_pages"], 3);
    assert_eq!(body["pagination"]["has_next_page"], true);
    assert_eq!(body["pagination"]["has_previous_page"], false);
}

#[tokio::test]
async fn test_list_products_metadata_for_every_allowed_limit() {
    let app = TestApp::spawn().await;

    for (page, limit, expected_items, total_pages) in
        [(1, 10, 10, 3), (3, 10, 5, 3), (2, 20, 5, 2), (1, 50, 25, 1)]
    {
        let (status, body) =
            get_json(&app, &format!("/api/products?page={}&limit={}", page, limit)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), expected_items);
        assert_eq!(body["pagination"]["current_page"], page);
        assert_eq!(body["pagination"]["items_per_page"], limit);
        assert_eq!(body["pagination"]["total_pages"], total_pages);
    }
}

#[tokio::test]
async fn test_list_products_second_page_starts_at_offset() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/products?page=2&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (11..=20).collect::<Vec<_>>());
    assert_eq!(body["pagination"]["has_next_page"], true);
    assert_eq!(body["pagination"]["has_previous_page"], true);
}

#[tokio::test]
async fn test_list_products_page_past_the_end() {
    let app = TestApp::spawn_with_catalog((1..=5).map(product)).await;

    let (status, body) = get_json(&app, "/api/products?page=3&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total_items"], 5);
    assert_eq!(body["pagination"]["total_pages"], 1);
    assert_eq!(body["pagination"]["has_next_page"], false);
    assert_eq!(body["pagination"]["has_previous_page"], true);
}

#[tokio::test]
async fn test_list_products_empty_catalog() {
    let app = TestApp::spawn_with_catalog(Vec::new()).await;

    let (status, body) = get_json(&app, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["data"].as_array().unwrap().is_empty());
    assert_eq!(body["pagination"]["total_pages"], 0);
    assert_eq!(body["pagination"]["has_next_page"], false);
}

#[tokio::test]
async fn test_list_products_rejects_invalid_parameters() {
    let app = TestApp::spawn().await;

    for query in [
        "page=0",
        "page=-1",
        "page=abc",
        "page=",
        "limit=7",
        "limit=100",
        "limit=0",
        "page=1.5",
    ] {
        let (status, body) = get_json(&app, &format!("/api/products?{}", query)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "query {:?}", query);
        assert_eq!(body["status_code"], 400);
        assert!(body["data"]["message"]
            .as_str()
            .unwrap()
            .contains("Invalid page parameter"));
    }
}

#[tokio::test]
async fn test_list_products_undecodable_query_is_structured() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/products?page=1&page=2")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .starts_with("application/json"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status_code"], 400);
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("page"));
}

#[tokio::test]
async fn test_get_product_with_derived_measurements() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/products/7").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 7);
    assert_eq!(body["data"]["description"], "Product 7");
    assert_eq!(body["data"]["width"], 20.0);

    // 20cm x 15cm x 10cm, 1.5kg
    let volume = body["data"]["volume"].as_f64().unwrap();
    let density = body["data"]["density"].as_f64().unwrap();
    assert!((volume - 0.003).abs() < 1e-12);
    assert!((density - 500.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_get_product_not_found() {
    let app = TestApp::spawn().await;

    let (status, body) = get_json(&app, "/api/products/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status_code"], 404);
}

#[tokio::test]
async fn test_get_product_malformed_id() {
    let app = TestApp::spawn().await;

    for id in ["abc", "0", "-4"] {
        let (status, body) = get_json(&app, &format!("/api/products/{}", id)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "id {:?}", id);

        let message = body["data"]["message"].as_str().unwrap();
        assert!(message.starts_with("Invalid product id: "));
        assert_eq!(message.matches("Invalid product id").count(), 1);
    }
}
