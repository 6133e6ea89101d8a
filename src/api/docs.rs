// OpenAPI document for the query strategy endpoints

use utoipa::OpenApi;

use crate::api::query_strategies::handler::{self, FilterComparison};
use crate::models::{Department, DepartmentSummary, Employee};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Query Strategies API",
        version = "1.0.0",
        description = "The same Department/Employee data read with different query strategies. \
                       Every response payload is wrapped in the `data` field of the response envelope."
    ),
    paths(
        handler::n_plus_one_handler,
        handler::eager_handler,
        handler::projection_handler,
        handler::query_vs_enumerable_handler,
    ),
    components(schemas(Department, Employee, DepartmentSummary, FilterComparison)),
    tags((name = "Test", description = "Query strategy comparisons"))
)]
pub struct ApiDoc;
