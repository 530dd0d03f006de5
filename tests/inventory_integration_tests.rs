mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{request, test_app};

fn item_payload(item_code: &str) -> serde_json::Value {
    json!({
        "itemCode": item_code,
        "itemName": "Packing crate",
        "category": "packaging",
        "unit": "pcs",
        "minimumStock": 10,
        "maximumStock": 500,
        "reorderLevel": 50,
        "unitPrice": "12.50"
    })
}

#[tokio::test]
async fn test_create_inventory_master() {
    let app = test_app();

    let (status, created) = request(
        &app,
        Method::POST,
        "/api/inventory-masters",
        Some(item_payload("ITM-001")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["itemCode"], "ITM-001");
    assert_eq!(created["unitPrice"], "12.50");
    assert_eq!(created["minimumStock"], 10);
    assert_eq!(created["isActive"], true);
    assert!(created["id"].is_string());
}

/// POST without itemCode → 400 and the record never appears in the list.
#[tokio::test]
async fn test_missing_item_code_is_rejected() {
    let app = test_app();

    let mut payload = item_payload("ITM-001");
    payload.as_object_mut().unwrap().remove("itemCode");

    let (status, body) = request(&app, Method::POST, "/api/inventory-masters", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid inventory master data");

    let (_, list) = request(&app, Method::GET, "/api/inventory-masters", None).await;
    assert_eq!(list, json!([]));
}

/// Two creates with the same itemCode both succeed: the store enforces no
/// business-key uniqueness.
#[tokio::test]
async fn test_duplicate_item_code_is_accepted() {
    let app = test_app();

    let (status_a, a) = request(
        &app,
        Method::POST,
        "/api/inventory-masters",
        Some(item_payload("ITM-001")),
    )
    .await;
    let (status_b, b) = request(
        &app,
        Method::POST,
        "/api/inventory-masters",
        Some(item_payload("ITM-001")),
    )
    .await;
    assert_eq!(status_a, StatusCode::CREATED);
    assert_eq!(status_b, StatusCode::CREATED);
    assert_ne!(a["id"], b["id"]);

    let (_, list) = request(&app, Method::GET, "/api/inventory-masters", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_non_numeric_stock_level_is_rejected() {
    let app = test_app();

    let mut payload = item_payload("ITM-001");
    payload["minimumStock"] = json!("ten");

    let (status, body) = request(&app, Method::POST, "/api/inventory-masters", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid inventory master data");
}

#[tokio::test]
async fn test_partial_update_of_unit_price() {
    let app = test_app();

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/inventory-masters",
        Some(item_payload("ITM-001")),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/inventory-masters/{id}"),
        Some(json!({"unitPrice": "13.75"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["unitPrice"], "13.75");
    assert_eq!(updated["itemCode"], "ITM-001");
    assert_eq!(updated["maximumStock"], 500);
}
