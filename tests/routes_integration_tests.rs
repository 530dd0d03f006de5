mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{request, test_app};

// The liveness body is plain text, so this test drives the router directly
// instead of going through the JSON helper.
#[tokio::test]
async fn test_root_liveness() {
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    let app = test_app();
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"Hello from Backoffice Backend!");
}

/// Every resource group answers an empty list before any writes.
#[tokio::test]
async fn test_all_resource_groups_are_mounted() {
    let app = test_app();
    for path in [
        "/api/companies",
        "/api/account-masters",
        "/api/inventory-masters",
        "/api/customers",
        "/api/suppliers",
        "/api/transactions",
        "/api/stock-transactions",
        "/api/cold-storage-units",
        "/api/cold-storage-transactions",
    ] {
        let (status, list) = request(&app, Method::GET, path, None).await;
        assert_eq!(status, StatusCode::OK, "GET {path}");
        assert_eq!(list, json!([]), "GET {path}");
    }
}

#[tokio::test]
async fn test_account_master_hierarchy_fields() {
    let app = test_app();

    let (status, parent) = request(
        &app,
        Method::POST,
        "/api/account-masters",
        Some(json!({
            "accountCode": "1000",
            "accountName": "Assets",
            "accountType": "asset"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, child) = request(
        &app,
        Method::POST,
        "/api/account-masters",
        Some(json!({
            "accountCode": "1100",
            "accountName": "Cash",
            "accountType": "asset",
            "parentAccount": parent["id"]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(child["parentAccount"], parent["id"]);

    // Deleting the parent does not cascade or complain.
    let parent_id = parent["id"].as_str().unwrap();
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/account-masters/{parent_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let child_id = child["id"].as_str().unwrap();
    let (status, orphan) = request(
        &app,
        Method::GET,
        &format!("/api/account-masters/{child_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orphan["parentAccount"], parent["id"]);
}

/// A raw non-JSON body on a write is a validation failure, not a 500.
#[tokio::test]
async fn test_non_json_body_is_rejected() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/customers")
                .body(Body::from("definitely not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
