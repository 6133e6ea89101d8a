//! tests/query_strategies/eager.rs
//! Departments and employees loaded with a single joined query.

#[path = "../mod.rs"]
mod common;

use query_strategies_api::CompanyRepository;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_departments_with_nested_employees() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["code"], 200);
    assert_eq!(
        body["data"],
        json!([
            {
                "id": 1,
                "name": "Dev",
                "employees": [
                    { "id": 1, "name": "A", "departmentId": 1 },
                    { "id": 2, "name": "B", "departmentId": 1 }
                ]
            },
            {
                "id": 2,
                "name": "HR",
                "employees": [
                    { "id": 3, "name": "C", "departmentId": 2 }
                ]
            }
        ])
    );
}

#[tokio::test]
async fn reports_a_single_round_trip() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (_, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert_eq!(body["messages"], json!(["Loaded 2 departments in 1 query"]));
}

#[tokio::test]
async fn keeps_departments_without_employees() {
    let repository = common::dev_and_hr().await;
    repository.create_department("Ops", &[]).await.unwrap();
    let base_url: String = common::spawn_app(repository);

    let (_, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert_eq!(body["data"][2], json!({ "id": 3, "name": "Ops", "employees": [] }));
}
