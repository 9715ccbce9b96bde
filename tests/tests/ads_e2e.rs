//! End-to-end tests for the ad resource.
//!
//! POST/GET/PATCH/DELETE /ads → session middleware → SQLite (in-memory).

use std::collections::HashSet;

use axum::http::StatusCode;
use integration_tests::{fixtures, setup::TestContext};
use serde_json::{json, Value};

/// Create → get → delete → get, with a datastore-assigned id
#[tokio::test]
async fn test_ad_lifecycle() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.post("/ads").json(&fixtures::bicycle_ad()).await;
    response.assert_status_ok();
    let body: Value = response.json();
    let id = body["id"].as_i64().expect("create should return an integer id");
    assert_eq!(body, json!({ "id": id }), "create returns only the id");

    let response = server.get(&format!("/ads/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "id": id,
            "title": "Sale",
            "content": "Selling a bicycle",
            "owner": "alice"
        })
    );

    let response = server.delete(&format!("/ads/{}", id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

    let response = server.get(&format!("/ads/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

/// An explicit id is honored
#[tokio::test]
async fn test_create_with_explicit_id() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.post("/ads").json(&fixtures::ad_with_id(10)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "id": 10 }));

    let response = server.get("/ads/10").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["title"], "Test Ad");
    assert_eq!(body["owner"], "user15");
}

/// Generated ids are distinct
#[tokio::test]
async fn test_generated_ids_are_unique() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let first: Value = server.post("/ads").json(&fixtures::bicycle_ad()).await.json();
    let second: Value = server.post("/ads").json(&fixtures::bicycle_ad()).await.json();
    assert_ne!(first["id"], second["id"]);
}

/// Duplicate create is rejected and the stored record is untouched
#[tokio::test]
async fn test_duplicate_create_keeps_original() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post("/ads")
        .json(&fixtures::ad_with_id(42))
        .await
        .assert_status_ok();

    let mut duplicate = fixtures::bicycle_ad();
    duplicate["id"] = json!(42);
    let response = server.post("/ads").json(&duplicate).await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "ad already exists" })
    );

    let body: Value = server.get("/ads/42").await.json();
    assert_eq!(body["title"], "Test Ad");
    assert_eq!(body["content"], "This is a test advertisement.");
    assert_eq!(body["owner"], "user15");
}

/// Patch replaces the mutable fields and leaves the id alone
#[tokio::test]
async fn test_patch_replaces_fields() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post("/ads")
        .json(&fixtures::ad_with_id(7))
        .await
        .assert_status_ok();

    let mut update = fixtures::ad_payload("Bike", "Road bike, barely used", "bob");
    update["id"] = json!(8);
    let response = server.patch("/ads/7").json(&update).await;
    response.assert_status_ok();
    let expected = json!({
        "id": 7,
        "title": "Bike",
        "content": "Road bike, barely used",
        "owner": "bob"
    });
    assert_eq!(response.json::<Value>(), expected);

    let response = server.get("/ads/7").await;
    assert_eq!(response.json::<Value>(), expected);
    server.get("/ads/8").await.assert_status(StatusCode::NOT_FOUND);
}

/// A malformed body id on patch is ignored, not validated
#[tokio::test]
async fn test_patch_ignores_malformed_body_id() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post("/ads")
        .json(&fixtures::ad_with_id(7))
        .await
        .assert_status_ok();

    for bad_id in [json!("seven"), json!(0)] {
        let mut update = fixtures::ad_payload("Bike", "Road bike, barely used", "bob");
        update["id"] = bad_id;
        let response = server.patch("/ads/7").json(&update).await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["id"], 7);
    }

    let body: Value = server.get("/ads/7").await.json();
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "Bike");
}

/// Invalid patch leaves the stored record unchanged
#[tokio::test]
async fn test_invalid_patch_keeps_original() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post("/ads")
        .json(&fixtures::ad_with_id(3))
        .await
        .assert_status_ok();

    let response = server
        .patch("/ads/3")
        .json(&fixtures::ad_payload("ok", "Road bike, barely used", "bob"))
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = server.get("/ads/3").await.json();
    assert_eq!(body["title"], "Test Ad");
    assert_eq!(body["owner"], "user15");
}

/// Second delete of the same id is not-found
#[tokio::test]
async fn test_delete_twice() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    server
        .post("/ads")
        .json(&fixtures::ad_with_id(5))
        .await
        .assert_status_ok();

    server.delete("/ads/5").await.assert_status_ok();
    server
        .delete("/ads/5")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// List returns exactly the created records
#[tokio::test]
async fn test_list_returns_all_created() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let response = server.get("/ads").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));

    let payloads = fixtures::ads_with_ids(100, 5);
    for payload in &payloads {
        server.post("/ads").json(payload).await.assert_status_ok();
    }

    let listed: Vec<Value> = server.get("/ads").await.json();
    assert_eq!(listed.len(), payloads.len());

    let listed: HashSet<String> = listed.iter().map(|ad| ad.to_string()).collect();
    let expected: HashSet<String> = payloads.iter().map(|ad| ad.to_string()).collect();
    assert_eq!(listed, expected);
}

/// Unknown fields in the body are ignored
#[tokio::test]
async fn test_extra_fields_ignored() {
    let ctx = TestContext::new().await;
    let server = ctx.server();

    let mut payload = fixtures::bicycle_ad();
    payload["price"] = json!(120);
    let response = server.post("/ads").json(&payload).await;
    response.assert_status_ok();

    let id = response.json::<Value>()["id"].as_i64().unwrap();
    let body: Value = server.get(&format!("/ads/{}", id)).await.json();
    assert!(body.get("price").is_none());
}
