mod common;

use std::sync::Arc;

use common::{setup_test_client, setup_test_client_with_store, OTHER_UUID, VALID_UUID};
use itemstash_backend::stores::ItemStore;
use itemstash_backend::types::internal::{ItemRecord, ValidationFailurePolicy};
use poem::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_item_returns_created_item() {
    let (client, store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client
        .post("/items")
        .body_json(&json!({"uuid": VALID_UUID, "message": "This is a valid message"}))
        .send()
        .await;

    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "message": "Item created successfully",
            "is_success": true,
            "data": {"uuid": VALID_UUID, "message": "This is a valid message"}
        }))
        .await;
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_create_invalid_item_legacy_policy_answers_200() {
    let (client, store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client
        .post("/items")
        .body_json(&json!({"uuid": "not-a-uuid", "message": "short"}))
        .send()
        .await;

    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "message": "Input should be a valid UUID",
            "is_success": true,
            "data": null
        }))
        .await;
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_invalid_item_strict_policy_answers_422() {
    let (client, store) = setup_test_client(ValidationFailurePolicy::Strict);

    let response = client
        .post("/items")
        .body_json(&json!({"uuid": "not-a-uuid", "message": "short"}))
        .send()
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response
        .assert_json(json!({
            "message": "Input should be a valid UUID",
            "is_success": false,
            "data": null
        }))
        .await;
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_create_item_with_long_message_is_rejected() {
    let (client, store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client
        .post("/items")
        .body_json(&json!({"uuid": VALID_UUID, "message": "z".repeat(256)}))
        .send()
        .await;

    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "message": "String should have at most 255 characters",
            "is_success": true,
            "data": null
        }))
        .await;
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_malformed_json_body_is_rejected_by_server() {
    let (client, store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client
        .post("/items")
        .content_type("application/json")
        .body("{not json")
        .send()
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_list_items_on_empty_store() {
    let (client, _store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client.get("/items").send().await;

    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "message": "Items retrieved successfully",
            "is_success": true,
            "data": []
        }))
        .await;
}

#[tokio::test]
async fn test_list_items_in_creation_order() {
    let (client, _store) = setup_test_client(ValidationFailurePolicy::Legacy);

    for (uuid, message) in [(VALID_UUID, "first item A"), (OTHER_UUID, "second item B")] {
        client
            .post("/items")
            .body_json(&json!({"uuid": uuid, "message": message}))
            .send()
            .await
            .assert_status_is_ok();
    }

    let response = client.get("/items").send().await;

    response.assert_status_is_ok();
    response
        .assert_json(json!({
            "message": "Items retrieved successfully",
            "is_success": true,
            "data": [
                {"uuid": VALID_UUID, "message": "first item A"},
                {"uuid": OTHER_UUID, "message": "second item B"}
            ]
        }))
        .await;
}

#[tokio::test]
async fn test_list_items_drops_records_failing_read_schema() {
    let store = Arc::new(ItemStore::with_records(vec![
        ItemRecord::new(VALID_UUID, "short"),
        ItemRecord::new(OTHER_UUID, "a record that is valid"),
        ItemRecord::new("bogus", "a record with a bad uuid"),
    ]));
    let client = setup_test_client_with_store(ValidationFailurePolicy::Legacy, store.clone());

    let response = client.get("/items").send().await;

    response.assert_status_is_ok();
    let json = response.json().await;
    let data = json.value().object().get("data").array();
    data.assert_len(1);
    data.get(0)
        .object()
        .get("message")
        .assert_string("a record that is valid");
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_root_greeting() {
    let (client, _store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client.get("/").send().await;

    response.assert_status_is_ok();
    response
        .assert_json(json!("Hello, this is the main endpoint of the API"))
        .await;
}

#[tokio::test]
async fn test_openapi_document_lists_item_paths() {
    let (client, _store) = setup_test_client(ValidationFailurePolicy::Legacy);

    let response = client.get("/openapi.json").send().await;

    response.assert_status_is_ok();
    let json = response.json().await;
    let paths = json.value().object().get("paths").object();
    paths.get("/items").object().get("post");
    paths.get("/items").object().get("get");
}
