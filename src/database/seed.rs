// Demo data for an empty database

use anyhow::Result;
use tracing::info;

use crate::database::repository::CompanyRepository;

/// Departments and their employees inserted on first start
pub const DEMO_DEPARTMENTS: &[(&str, &[&str])] = &[
    ("Development", &["Kim Cheolsu", "Lee Younghee"]),
    ("HR", &["Park Jimin"]),
];

/// Inserts the demo departments unless the store already holds data.
/// Returns whether anything was inserted.
pub async fn seed_demo_data(repository: &dyn CompanyRepository) -> Result<bool> {
    if !repository.is_empty().await? {
        info!("Departments already present, skipping demo seed");
        return Ok(false);
    }

    for (department, employees) in DEMO_DEPARTMENTS {
        repository.create_department(department, employees).await?;
    }

    info!("Seeded {} demo departments", DEMO_DEPARTMENTS.len());
    Ok(true)
}
