pub mod docs;
pub mod query_strategies;
