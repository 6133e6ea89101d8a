// In-memory CompanyRepository.
// Mirrors the PostgreSQL queries row for row, including ordering and the
// round-trip count each strategy would cost against a real database.

use std::sync::Arc;
use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::repository::{CompanyRepository, Fetched};
use crate::models::department::{attach_employees, fold_joined_rows};
use crate::models::{Department, DepartmentEmployeeRow, DepartmentRow, DepartmentSummary, Employee};

#[derive(Debug, Default)]
struct Tables {
    departments: Vec<DepartmentRow>,
    employees: Vec<Employee>,
    next_department_id: i32,
    next_employee_id: i32,
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCompanyRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn departments_batched(&self) -> Result<Fetched<Vec<Department>>> {
        let tables = self.tables.read().await;

        if tables.departments.is_empty() {
            return Ok(Fetched::new(Vec::new(), 1));
        }

        let departments: Vec<Department> = attach_employees(tables.departments.clone(), tables.employees.clone());
        Ok(Fetched::new(departments, 2))
    }

    async fn departments_joined(&self) -> Result<Fetched<Vec<Department>>> {
        let tables = self.tables.read().await;

        // LEFT JOIN, ordered by department id then employee id
        let mut rows: Vec<DepartmentEmployeeRow> = Vec::new();
        for department in &tables.departments {
            let mut matched: bool = false;
            for employee in tables.employees.iter().filter(|e: &&Employee| e.department_id == department.id) {
                matched = true;
                rows.push(DepartmentEmployeeRow {
                    department_id: department.id,
                    department_name: department.name.clone(),
                    employee_id: Some(employee.id),
                    employee_name: Some(employee.name.clone()),
                });
            }
            if !matched {
                rows.push(DepartmentEmployeeRow {
                    department_id: department.id,
                    department_name: department.name.clone(),
                    employee_id: None,
                    employee_name: None,
                });
            }
        }

        Ok(Fetched::new(fold_joined_rows(rows), 1))
    }

    async fn department_summaries(&self) -> Result<Fetched<Vec<DepartmentSummary>>> {
        let tables = self.tables.read().await;

        let summaries: Vec<DepartmentSummary> = tables
            .departments
            .iter()
            .map(|department: &DepartmentRow| {
                let emp_names: Vec<String> = tables
                    .employees
                    .iter()
                    .filter(|e: &&Employee| e.department_id == department.id)
                    .map(|e: &Employee| e.name.clone())
                    .collect();

                DepartmentSummary {
                    dept_name: department.name.clone(),
                    total_employees: emp_names.len() as i64,
                    emp_names,
                }
            })
            .collect();

        Ok(Fetched::new(summaries, 1))
    }

    async fn employees_named(&self, name: &str) -> Result<Fetched<Vec<Employee>>> {
        let tables = self.tables.read().await;

        let employees: Vec<Employee> = tables
            .employees
            .iter()
            .filter(|e: &&Employee| e.name == name)
            .cloned()
            .collect();

        Ok(Fetched::new(employees, 1))
    }

    async fn all_employees(&self) -> Result<Fetched<Vec<Employee>>> {
        let tables = self.tables.read().await;
        Ok(Fetched::new(tables.employees.clone(), 1))
    }

    async fn create_department(&self, name: &str, employee_names: &[&str]) -> Result<Department> {
        let mut tables = self.tables.write().await;

        tables.next_department_id += 1;
        let department: DepartmentRow = DepartmentRow {
            id: tables.next_department_id,
            name: name.to_string(),
        };
        tables.departments.push(department.clone());

        let mut employees: Vec<Employee> = Vec::with_capacity(employee_names.len());
        for employee_name in employee_names {
            tables.next_employee_id += 1;
            let employee: Employee = Employee {
                id: tables.next_employee_id,
                name: employee_name.to_string(),
                department_id: department.id,
            };
            tables.employees.push(employee.clone());
            employees.push(employee);
        }

        Ok(Department {
            id: department.id,
            name: department.name,
            employees,
        })
    }

    async fn is_empty(&self) -> Result<bool> {
        Ok(self.tables.read().await.departments.is_empty())
    }
}
