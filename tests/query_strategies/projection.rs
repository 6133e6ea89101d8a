//! tests/query_strategies/projection.rs
//! Only the department name, employee count, and employee names.

#[path = "../mod.rs"]
mod common;

use query_strategies_api::CompanyRepository;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn returns_reduced_shape_per_department() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/projection").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([
            { "DeptName": "Dev", "TotalEmployees": 2, "EmpNames": ["A", "B"] },
            { "DeptName": "HR", "TotalEmployees": 1, "EmpNames": ["C"] }
        ])
    );
}

#[tokio::test]
async fn total_matches_names_for_every_department() {
    let repository = common::dev_and_hr().await;
    repository.create_department("Ops", &[]).await.unwrap();
    repository.create_department("Sales", &["D", "E", "F", "D"]).await.unwrap();
    let base_url: String = common::spawn_app(repository);

    let (_, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/projection").await;
    let rows: &Vec<Value> = body["data"].as_array().unwrap();

    assert_eq!(rows.len(), 4);
    for row in rows {
        let names: usize = row["EmpNames"].as_array().unwrap().len();
        assert_eq!(row["TotalEmployees"].as_u64().unwrap() as usize, names);
    }
    assert_eq!(rows[2], json!({ "DeptName": "Ops", "TotalEmployees": 0, "EmpNames": [] }));
}
