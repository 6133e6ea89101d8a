// Department entity, its projection, and the helpers that assemble
// departments from flat query results

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::employee::Employee;

/// A bare row of the `departments` table, without its employees
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

/// A department with its employees attached.
/// Parent embeds children; children never point back to the parent object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub employees: Vec<Employee>,
}

/// One row of `departments LEFT JOIN employees`.
/// Employee columns are NULL for departments without employees.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DepartmentEmployeeRow {
    pub department_id: i32,
    pub department_name: String,
    pub employee_id: Option<i32>,
    pub employee_name: Option<String>,
}

/// Reduced per-department shape computed by the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct DepartmentSummary {
    pub dept_name: String,
    pub total_employees: i64,
    pub emp_names: Vec<String>,
}

/// Attaches employees to their departments by foreign key in a single pass.
/// Department order and per-department employee order are preserved;
/// employees whose department is not in `departments` are dropped.
pub fn attach_employees(departments: Vec<DepartmentRow>, employees: Vec<Employee>) -> Vec<Department> {
    let mut by_department: HashMap<i32, Vec<Employee>> = HashMap::with_capacity(departments.len());

    for employee in employees {
        by_department.entry(employee.department_id).or_default().push(employee);
    }

    departments
        .into_iter()
        .map(|row: DepartmentRow| {
            let employees: Vec<Employee> = by_department.remove(&row.id).unwrap_or_default();
            Department {
                id: row.id,
                name: row.name,
                employees,
            }
        })
        .collect()
}

/// Folds joined rows, ordered by department id, into departments
pub fn fold_joined_rows(rows: Vec<DepartmentEmployeeRow>) -> Vec<Department> {
    let mut departments: Vec<Department> = Vec::new();

    for row in rows {
        let is_same_department: bool = departments
            .last()
            .is_some_and(|current: &Department| current.id == row.department_id);

        if !is_same_department {
            departments.push(Department {
                id: row.department_id,
                name: row.department_name,
                employees: Vec::new(),
            });
        }

        if let (Some(id), Some(name), Some(current)) = (row.employee_id, row.employee_name, departments.last_mut()) {
            current.employees.push(Employee {
                id,
                name,
                department_id: row.department_id,
            });
        }
    }

    departments
}
