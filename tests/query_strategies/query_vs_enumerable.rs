//! tests/query_strategies/query_vs_enumerable.rs
//! The same name filter run by the database and in memory.

#[path = "../mod.rs"]
mod common;

use std::collections::BTreeSet;

use query_strategies_api::CompanyRepository;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn ids(employees: &Value) -> BTreeSet<i64> {
    employees
        .as_array()
        .unwrap()
        .iter()
        .map(|e: &Value| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn both_strategies_return_the_same_employees() {
    let repository = common::dev_and_hr().await;
    repository.create_department("Ops", &["A", "D"]).await.unwrap();
    let base_url: String = common::spawn_app(repository);

    for name in ["A", "B", "C", "D", "a", "nobody", ""] {
        let (status, body): (StatusCode, Value) =
            common::get_json(&base_url, &format!("/Test/query-vs-enumerable?name={}", name)).await;

        assert_eq!(status, StatusCode::OK, "{}", name);
        assert_eq!(
            ids(&body["data"]["queryResult"]),
            ids(&body["data"]["listResult"]),
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn returns_matching_rows_only() {
    let repository = common::dev_and_hr().await;
    repository.create_department("Ops", &["A"]).await.unwrap();
    let base_url: String = common::spawn_app(repository);

    let (_, body): (StatusCode, Value) =
        common::get_json(&base_url, "/Test/query-vs-enumerable?name=A").await;

    let expected: Value = json!([
        { "id": 1, "name": "A", "departmentId": 1 },
        { "id": 4, "name": "A", "departmentId": 3 }
    ]);
    assert_eq!(body["data"]["queryResult"], expected);
    assert_eq!(body["data"]["listResult"], expected);
    assert_eq!(
        body["messages"],
        json!(["Database filter read 2 rows", "In-memory filter read 4 rows to keep 2"])
    );
}

#[tokio::test]
async fn missing_name_is_not_rejected() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, body): (StatusCode, Value) =
        common::get_json(&base_url, "/Test/query-vs-enumerable").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "queryResult": [], "listResult": [] }));
}

#[tokio::test]
async fn repeated_name_uses_the_first_value() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, body): (StatusCode, Value) =
        common::get_json(&base_url, "/Test/query-vs-enumerable?name=A&name=B").await;

    let expected: Value = json!([{ "id": 1, "name": "A", "departmentId": 1 }]);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["queryResult"], expected);
    assert_eq!(body["data"]["listResult"], expected);
}
