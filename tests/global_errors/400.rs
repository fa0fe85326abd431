//! tests/global_errors/400.rs
//! A body that is not JSON is rejected before any function runs.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_400_for_malformed_event() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/functions/authorizer/invocations", base_url))
        .header("content-type", "application/json")
        .body("{\"authorizationToken\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "BAD_REQUEST");
    assert_eq!(json["code"], 400);
    assert_eq!(json["messages"][0], "Event payload is not valid JSON");
}
