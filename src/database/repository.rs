//! Company repository: the query strategies compared by the API.
//!
//! Every read reports how many database round-trips it needed so handlers
//! can surface the cost of each strategy next to its result.

use async_trait::async_trait;
use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::models::department::{attach_employees, fold_joined_rows};
use crate::models::{Department, DepartmentEmployeeRow, DepartmentRow, DepartmentSummary, Employee};

/// Query result together with the number of round-trips it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    pub data: T,
    pub round_trips: usize,
}

impl<T> Fetched<T> {
    pub fn new(data: T, round_trips: usize) -> Self {
        Self { data, round_trips }
    }
}

/// Read and seed operations over the departments/employees schema.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Departments first, then every employee of those departments in one
    /// batched query, attached by foreign key in memory.
    async fn departments_batched(&self) -> Result<Fetched<Vec<Department>>>;

    /// Departments and employees in a single joined query.
    async fn departments_joined(&self) -> Result<Fetched<Vec<Department>>>;

    /// Per-department name, employee count, and employee names,
    /// aggregated by the database.
    async fn department_summaries(&self) -> Result<Fetched<Vec<DepartmentSummary>>>;

    /// Employees whose name equals `name`, filtered by the database.
    async fn employees_named(&self, name: &str) -> Result<Fetched<Vec<Employee>>>;

    /// The whole employees table.
    async fn all_employees(&self) -> Result<Fetched<Vec<Employee>>>;

    /// Inserts a department together with its employees.
    async fn create_department(&self, name: &str, employee_names: &[&str]) -> Result<Department>;

    /// Whether no department exists yet.
    async fn is_empty(&self) -> Result<bool>;
}

/// PostgreSQL implementation of CompanyRepository.
#[derive(Clone, Debug)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    #[instrument(skip(self))]
    async fn departments_batched(&self) -> Result<Fetched<Vec<Department>>> {
        let departments: Vec<DepartmentRow> = sqlx::query_as(
            "SELECT id, name FROM departments ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load departments")?;

        if departments.is_empty() {
            return Ok(Fetched::new(Vec::new(), 1));
        }

        let department_ids: Vec<i32> = departments.iter().map(|d: &DepartmentRow| d.id).collect();

        let employees: Vec<Employee> = sqlx::query_as(
            "SELECT id, name, department_id
             FROM employees
             WHERE department_id = ANY($1)
             ORDER BY id"
        )
        .bind(&department_ids)
        .fetch_all(&self.pool)
        .await
        .context("Failed to batch-load employees")?;

        debug!("Attaching {} employees to {} departments", employees.len(), departments.len());

        Ok(Fetched::new(attach_employees(departments, employees), 2))
    }

    #[instrument(skip(self))]
    async fn departments_joined(&self) -> Result<Fetched<Vec<Department>>> {
        let rows: Vec<DepartmentEmployeeRow> = sqlx::query_as(
            "SELECT d.id   AS department_id,
                    d.name AS department_name,
                    e.id   AS employee_id,
                    e.name AS employee_name
             FROM departments d
             LEFT JOIN employees e ON e.department_id = d.id
             ORDER BY d.id, e.id"
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load departments with employees")?;

        Ok(Fetched::new(fold_joined_rows(rows), 1))
    }

    #[instrument(skip(self))]
    async fn department_summaries(&self) -> Result<Fetched<Vec<DepartmentSummary>>> {
        let summaries: Vec<DepartmentSummary> = sqlx::query_as(
            "SELECT d.name AS dept_name,
                    COUNT(e.id) AS total_employees,
                    COALESCE(
                        array_agg(e.name ORDER BY e.id) FILTER (WHERE e.id IS NOT NULL),
                        ARRAY[]::TEXT[]
                    ) AS emp_names
             FROM departments d
             LEFT JOIN employees e ON e.department_id = d.id
             GROUP BY d.id, d.name
             ORDER BY d.id"
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load department summaries")?;

        Ok(Fetched::new(summaries, 1))
    }

    #[instrument(skip(self))]
    async fn employees_named(&self, name: &str) -> Result<Fetched<Vec<Employee>>> {
        let employees: Vec<Employee> = sqlx::query_as(
            "SELECT id, name, department_id FROM employees WHERE name = $1 ORDER BY id"
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .context("Failed to query employees by name")?;

        Ok(Fetched::new(employees, 1))
    }

    #[instrument(skip(self))]
    async fn all_employees(&self) -> Result<Fetched<Vec<Employee>>> {
        let employees: Vec<Employee> = sqlx::query_as(
            "SELECT id, name, department_id FROM employees ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to load employees")?;

        Ok(Fetched::new(employees, 1))
    }

    #[instrument(skip(self, employee_names))]
    async fn create_department(&self, name: &str, employee_names: &[&str]) -> Result<Department> {
        let mut tx: sqlx::Transaction<'_, sqlx::Postgres> = self.pool.begin().await
            .context("Failed to begin transaction")?;

        let department: DepartmentRow = sqlx::query_as(
            "INSERT INTO departments (name) VALUES ($1) RETURNING id, name"
        )
        .bind(name)
        .fetch_one(&mut *tx)
        .await
        .context(format!("Failed to insert department '{}'", name))?;

        let mut employees: Vec<Employee> = Vec::with_capacity(employee_names.len());

        for employee_name in employee_names {
            let employee: Employee = sqlx::query_as(
                "INSERT INTO employees (name, department_id) VALUES ($1, $2)
                 RETURNING id, name, department_id"
            )
            .bind(*employee_name)
            .bind(department.id)
            .fetch_one(&mut *tx)
            .await
            .context(format!("Failed to insert employee '{}'", employee_name))?;

            employees.push(employee);
        }

        tx.commit().await.context("Failed to commit transaction")?;

        Ok(Department {
            id: department.id,
            name: department.name,
            employees,
        })
    }

    #[instrument(skip(self))]
    async fn is_empty(&self) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM departments)")
            .fetch_one(&self.pool)
            .await
            .context("Failed to check for departments")?;

        Ok(!exists)
    }
}
