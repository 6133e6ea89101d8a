// Query strategy route definitions

use axum::{
    routing::get,
    Router,
};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the four query strategy endpoints under /Test
pub fn query_strategy_routes() -> Router<AppState> {
    Router::new()
        .route("/Test/n-plus-one", get(handler::n_plus_one_handler))
        .route("/Test/eager", get(handler::eager_handler))
        .route("/Test/projection", get(handler::projection_handler))
        .route("/Test/query-vs-enumerable", get(handler::query_vs_enumerable_handler))
}
