use super::test_utilities::{TestClient, TestStub, item_body};
use marketplace_stub::ErrorResponse;
use serde_json::{Value, json};

#[tokio::test]
async fn test_create_then_get_item() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    let created = client.create_ok(424242, "Stub Lamp").await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["sellerId"], 424242);
    assert_eq!(created["statistics"]["viewCount"], 100);
    assert!(created["createdAt"].is_string());

    let response = client.get(&format!("/api/1/item/{id}")).await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Vec<Value> = response.json().await.unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0], created);
}

#[tokio::test]
async fn test_create_rejects_invalid_bodies() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    let cases = [
        json!({}),
        json!({"name": "No seller", "price": 10, "statistics": {"likes": 0, "viewCount": 0, "contacts": 0}}),
        item_body(424242, "", 100),
        item_body(424242, "x'; DROP TABLE items; --", 100),
        item_body(424242, "Negative", -1),
        json!({"sellerID": "abc", "name": "Typed", "price": 10, "statistics": {"likes": 0, "viewCount": 0, "contacts": 0}}),
        json!({"sellerID": 424242, "name": "Partial", "price": 10, "statistics": {"likes": 1}}),
    ];

    for body in cases {
        let response = client.create(&body).await.unwrap();
        assert_eq!(response.status(), 400, "body {body} should be rejected");
        let error: ErrorResponse = response.json().await.unwrap();
        assert_eq!(error.error, "validation_error");
    }
    assert!(stub.state.store.is_empty());
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    let response = client
        .client
        .post(format!("{}/api/1/item", client.base_url))
        .header("Content-Type", "application/json")
        .body("{invalid json}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 400);
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(error.error, "malformed_body");
}

#[tokio::test]
async fn test_get_item_status_codes() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    let missing = client
        .get("/api/1/item/00000000-0000-0000-0000-000000000000")
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let error: ErrorResponse = missing.json().await.unwrap();
    assert_eq!(error.error, "item_not_found");

    let malformed = client.get("/api/1/item/invalid-id-format").await.unwrap();
    assert_eq!(malformed.status(), 400);

    let empty = client.get("/api/1/item/").await.unwrap();
    assert_eq!(empty.status(), 400);
}

#[tokio::test]
async fn test_seller_items_are_filtered() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    client.create_ok(111111, "First").await;
    client.create_ok(111111, "Second").await;
    client.create_ok(222222, "Other").await;

    let response = client.get("/api/1/111111/item").await.unwrap();
    assert_eq!(response.status(), 200);
    let items: Vec<Value> = response.json().await.unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|item| item["sellerId"] == 111111));

    let empty = client.get("/api/1/999999/item").await.unwrap();
    assert_eq!(empty.status(), 200);
    let items: Vec<Value> = empty.json().await.unwrap();
    assert!(items.is_empty());

    for bad in ["abc", "-1", "0"] {
        let response = client.get(&format!("/api/1/{bad}/item")).await.unwrap();
        assert_eq!(response.status(), 400, "seller id {bad}");
    }
}

#[tokio::test]
async fn test_delete_item() {
    let stub = TestStub::start().await.unwrap();
    let client = TestClient::new(&stub);

    let created = client.create_ok(333333, "Disposable").await;
    let id = created["id"].as_str().unwrap();

    let response = client.delete(&format!("/api/2/item/{id}")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(stub.state.store.get(id).is_none());

    let again = client.delete(&format!("/api/2/item/{id}")).await.unwrap();
    assert_eq!(again.status(), 404);

    let malformed = client.delete("/api/2/item/not-a-uuid").await.unwrap();
    assert_eq!(malformed.status(), 400);
}
