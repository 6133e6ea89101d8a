// Employee entity and in-memory filtering

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A row of the `employees` table.
/// Serialized without any back-reference to its department object,
/// only the scalar foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub department_id: i32,
}

/// Exact, case-sensitive name match applied after the rows are already in memory
pub fn filter_by_name(employees: Vec<Employee>, name: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|employee: &Employee| employee.name == name)
        .collect()
}
