// Application state shared by every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;
use crate::database::CompanyRepository;

/// Read-only state cloned into each request
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub repository: Arc<dyn CompanyRepository>,
}

impl AppState {
    pub fn new(environment: Arc<EnvironmentVariables>, repository: Arc<dyn CompanyRepository>) -> Self {
        Self {
            environment,
            repository,
        }
    }
}
