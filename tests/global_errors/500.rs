//! tests/global_errors/500.rs
//! Ensures that a failing query maps to a generic HTTP 500.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_500_when_every_query_fails() {
    let base_url: String = common::spawn_app(Arc::new(common::FailingRepository));

    for path in [
        "/Test/n-plus-one",
        "/Test/eager",
        "/Test/projection",
        "/Test/query-vs-enumerable?name=A",
    ] {
        let (status, json): (StatusCode, Value) = common::get_json(&base_url, path).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", path);
        assert_eq!(json["status"], "INTERNAL_SERVER_ERROR");
        assert_eq!(json["code"], 500);
        assert_eq!(json["data"], Value::Null);
    }
}

#[tokio::test]
async fn error_details_are_not_leaked() {
    let base_url: String = common::spawn_app(Arc::new(common::FailingRepository));

    let (_, json): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert!(!json.to_string().contains("connection refused"));
}
