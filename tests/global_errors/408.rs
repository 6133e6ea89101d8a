//! tests/global_errors/408.rs
//! Ensures that requests taking too long result in a 408 timeout.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use query_strategies_api::InMemoryCompanyRepository;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::time::timeout;

#[tokio::test]
async fn returns_408_when_the_database_is_too_slow() {
    let repository: common::SlowRepository = common::SlowRepository {
        delay: Duration::from_secs(3),
        inner: InMemoryCompanyRepository::new(),
    };
    let base_url: String = common::spawn_app_with(
        common::test_environment(&[("DEFAULT_TIMEOUT_SECONDS", "1")]),
        Arc::new(repository),
    );

    // Client-side timeout well above the server's one second budget.
    let resp_result: Result<(StatusCode, Value), tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5),
        common::get_json(&base_url, "/Test/eager"),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let (status, json): (StatusCode, Value) = resp_result.unwrap();

    assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
