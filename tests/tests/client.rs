//! Round-trip tests for the HTTP client against a real listener.

use ad_client::{AdClient, AdRequest};
use axum::http::StatusCode;
use integration_tests::{fixtures, setup::TestContext};
use serde_json::json;

fn request(id: Option<i64>) -> AdRequest {
    AdRequest {
        id,
        title: "Test Ad".to_string(),
        content: "This is a test advertisement.".to_string(),
        owner: "user15".to_string(),
    }
}

/// Create, fetch, patch, list and delete through the client
#[tokio::test]
async fn test_client_round_trip() {
    let ctx = TestContext::new().await;
    let base_url = ctx.spawn().await;
    let client = AdClient::new(base_url).expect("Failed to create client");

    let created = client.create(&request(Some(10))).await.unwrap();
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body, json!({ "id": 10 }));

    let fetched = client.get(10).await.unwrap();
    assert!(fetched.is_success());
    assert_eq!(fetched.body["owner"], "user15");

    let mut update = request(None);
    update.title = "Updated Ad".to_string();
    let patched = client.update(10, &update).await.unwrap();
    assert!(patched.is_success());
    assert_eq!(patched.body["title"], "Updated Ad");

    let listed = client.list().await.unwrap();
    assert_eq!(listed.body.as_array().map(|a| a.len()), Some(1));

    let deleted = client.delete(10).await.unwrap();
    assert_eq!(deleted.body, json!({ "status": "deleted" }));

    let missing = client.get(10).await.unwrap();
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

/// Error envelopes come back as JSON bodies
#[tokio::test]
async fn test_client_surfaces_conflict() {
    let ctx = TestContext::new().await;
    let client = AdClient::new(ctx.spawn().await).unwrap();

    client.create(&request(Some(1))).await.unwrap();
    let duplicate = client.create(&request(Some(1))).await.unwrap();
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body, json!({ "error": "ad already exists" }));

    let missing = client.delete(fixtures::MISSING_ID).await.unwrap();
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
