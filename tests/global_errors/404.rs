//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns HTTP 404.

// Include the helper module defined in tests/mod.rs.
#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, json): (StatusCode, Value) = common::get_json(&base_url, "/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["data"], Value::Null);
}

#[tokio::test]
async fn routes_are_case_sensitive() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, _): (StatusCode, Value) = common::get_json(&base_url, "/test/eager").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
