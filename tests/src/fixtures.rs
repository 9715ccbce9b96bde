//! Test fixtures and payload generators.

use serde_json::{json, Value};

/// A valid create/patch payload.
pub fn ad_payload(title: &str, content: &str, owner: &str) -> Value {
    json!({
        "title": title,
        "content": content,
        "owner": owner
    })
}

/// The bicycle ad used throughout the examples.
pub fn bicycle_ad() -> Value {
    ad_payload("Sale", "Selling a bicycle", "alice")
}

/// A valid payload with an explicit id.
pub fn ad_with_id(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Test Ad",
        "content": "This is a test advertisement.",
        "owner": "user15"
    })
}

/// N valid payloads with distinct explicit ids starting at `first_id`.
pub fn ads_with_ids(first_id: i64, n: usize) -> Vec<Value> {
    (0..n as i64)
        .map(|i| {
            json!({
                "id": first_id + i,
                "title": format!("Ad number {}", i),
                "content": format!("Content for ad number {}", i),
                "owner": "bulk-owner"
            })
        })
        .collect()
}

/// Id never inserted by any test.
pub const MISSING_ID: i64 = 999_999;
