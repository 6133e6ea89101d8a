// Query strategy endpoints: the same two tables read four different ways

use serde::Serialize;
use utoipa::ToSchema;
use serde_json::json;
use axum::{http::StatusCode, extract::{Query, State}};

use crate::config::state::AppState;
use crate::database::Fetched;
use crate::models::employee::filter_by_name;
use crate::models::{Department, DepartmentSummary, Employee};
use crate::utils::error_handler::AppError;
use crate::utils::response_handler::HandlerResponse;
use tracing::{instrument, info};

/// The same filter evaluated by the database and in memory
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterComparison {
    pub query_result: Vec<Employee>,
    pub list_result: Vec<Employee>,
}

/// First `name` in the query string; a missing `name` filters on the empty string.
fn name_filter(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value)
        .unwrap_or_default()
}

fn queries(round_trips: usize) -> String {
    match round_trips {
        1 => "1 query".to_string(),
        n => format!("{} queries", n),
    }
}

/// Departments, then all of their employees in one batched follow-up query
#[utoipa::path(
    get,
    path = "/Test/n-plus-one",
    tag = "Test",
    responses((status = 200, description = "Departments with employees, fetched in two queries", body = [Department]))
)]
#[instrument(skip(state))]
pub async fn n_plus_one_handler(State(state): State<AppState>) -> Result<HandlerResponse, AppError> {
    let departments: Fetched<Vec<Department>> = state.repository.departments_batched().await?;

    info!(round_trips = departments.round_trips, "Loaded departments with batched employees");

    Ok(HandlerResponse::new(StatusCode::OK)
        .message(format!("Loaded {} departments in {}", departments.data.len(), queries(departments.round_trips)))
        .data(json!(departments.data)))
}

/// Departments and employees in a single joined query
#[utoipa::path(
    get,
    path = "/Test/eager",
    tag = "Test",
    responses((status = 200, description = "Departments with employees, fetched in one query", body = [Department]))
)]
#[instrument(skip(state))]
pub async fn eager_handler(State(state): State<AppState>) -> Result<HandlerResponse, AppError> {
    let departments: Fetched<Vec<Department>> = state.repository.departments_joined().await?;

    info!(round_trips = departments.round_trips, "Loaded departments with joined employees");

    Ok(HandlerResponse::new(StatusCode::OK)
        .message(format!("Loaded {} departments in {}", departments.data.len(), queries(departments.round_trips)))
        .data(json!(departments.data)))
}

/// Only the department name, employee count, and employee names
#[utoipa::path(
    get,
    path = "/Test/projection",
    tag = "Test",
    responses((status = 200, description = "One summary per department", body = [DepartmentSummary]))
)]
#[instrument(skip(state))]
pub async fn projection_handler(State(state): State<AppState>) -> Result<HandlerResponse, AppError> {
    let summaries: Fetched<Vec<DepartmentSummary>> = state.repository.department_summaries().await?;

    info!(round_trips = summaries.round_trips, "Loaded department summaries");

    Ok(HandlerResponse::new(StatusCode::OK)
        .message(format!("Projected {} departments in {}", summaries.data.len(), queries(summaries.round_trips)))
        .data(json!(summaries.data)))
}

/// Filters by name in the database, then again over the full table in memory
#[utoipa::path(
    get,
    path = "/Test/query-vs-enumerable",
    tag = "Test",
    params(("name" = Option<String>, Query, description = "Exact employee name; only the first value is used")),
    responses((status = 200, description = "Database and in-memory filter results", body = FilterComparison))
)]
#[instrument(skip(state))]
pub async fn query_vs_enumerable_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<HandlerResponse, AppError> {
    let name: String = name_filter(params);
    let pushed_down: Fetched<Vec<Employee>> = state.repository.employees_named(&name).await?;

    // The whole table crosses the wire before the filter runs
    let full_table: Fetched<Vec<Employee>> = state.repository.all_employees().await?;
    let transferred_rows: usize = full_table.data.len();
    let in_memory: Vec<Employee> = filter_by_name(full_table.data, &name);

    info!(
        matched = pushed_down.data.len(),
        transferred_rows,
        "Compared database filter with in-memory filter"
    );

    let comparison: FilterComparison = FilterComparison {
        query_result: pushed_down.data,
        list_result: in_memory,
    };

    Ok(HandlerResponse::new(StatusCode::OK)
        .message(format!(
            "Database filter read {} rows",
            comparison.query_result.len()
        ))
        .message(format!(
            "In-memory filter read {} rows to keep {}",
            transferred_rows,
            comparison.list_result.len()
        ))
        .data(json!(comparison)))
}
