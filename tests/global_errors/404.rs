//! tests/global_errors/404.rs
//! Unknown routes and unknown function names both come back as a 404 envelope.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: String = resp.text().await.unwrap();
    let json: Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert!(json["date"].is_string());
}

#[tokio::test]
async fn returns_404_for_unknown_function() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/functions/billingLambda/invocations", base_url))
        .body("{}")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();

    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["data"]["function"], "billingLambda");
    assert_eq!(json["data"]["available"], serde_json::json!(["api", "authorizer"]));
    assert_eq!(json["messages"][0], "Unknown function 'billingLambda'");
}
