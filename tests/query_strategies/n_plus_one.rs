//! tests/query_strategies/n_plus_one.rs
//! Departments first, then their employees in one batched query.

#[path = "../mod.rs"]
mod common;

use std::sync::Arc;

use query_strategies_api::{CompanyRepository, InMemoryCompanyRepository};
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn matches_the_eager_endpoint() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (status, batched): (StatusCode, Value) = common::get_json(&base_url, "/Test/n-plus-one").await;
    let (_, eager): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(batched["data"], eager["data"]);
    assert_eq!(batched["data"][0]["employees"][1]["name"], "B");
}

#[tokio::test]
async fn matches_the_eager_endpoint_for_larger_data() {
    let repository: InMemoryCompanyRepository = InMemoryCompanyRepository::new();
    for d in 0..20 {
        let names: Vec<String> = (0..(d % 4)).map(|e| format!("emp-{}-{}", d, e)).collect();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        repository.create_department(&format!("dept-{}", d), &names).await.unwrap();
    }
    let base_url: String = common::spawn_app(Arc::new(repository));

    let (_, batched): (StatusCode, Value) = common::get_json(&base_url, "/Test/n-plus-one").await;
    let (_, eager): (StatusCode, Value) = common::get_json(&base_url, "/Test/eager").await;

    assert_eq!(batched["data"].as_array().unwrap().len(), 20);
    assert_eq!(batched["data"], eager["data"]);
}

#[tokio::test]
async fn uses_two_queries_regardless_of_department_count() {
    let base_url: String = common::spawn_app(common::dev_and_hr().await);

    let (_, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/n-plus-one").await;

    assert_eq!(body["messages"], json!(["Loaded 2 departments in 2 queries"]));
}

#[tokio::test]
async fn empty_database_returns_empty_list() {
    let base_url: String = common::spawn_app(Arc::new(InMemoryCompanyRepository::new()));

    let (status, body): (StatusCode, Value) = common::get_json(&base_url, "/Test/n-plus-one").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
    assert_eq!(body["messages"], json!(["Loaded 0 departments in 1 query"]));
}
