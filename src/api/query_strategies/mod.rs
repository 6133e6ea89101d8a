/*
* Query strategy endpoints and routes module.
* Each endpoint reads the same Department/Employee data with a different strategy.
*/

pub mod handler;
pub mod routes;

pub use routes::query_strategy_routes;
