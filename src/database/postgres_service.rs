// =============================================================================
// DATABASE SERVICE - Connection Pool + Schema Initialization
// =============================================================================

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{ConnectOptions, Executor, PgPool};
use tokio::sync::OnceCell;
use tracing::{debug, info, log::LevelFilter};

use crate::config::environment::EnvironmentVariables;

// =============================================================================
// SQL CONSTANTS
// =============================================================================

/// Creates the departments and employees tables
const INIT_SCHEMA_SQL: &str = include_str!("sql/schemas/schema_init.sql");

// =============================================================================
// DATABASE SERVICE
// =============================================================================

/// Database service managing a single PostgreSQL connection pool.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    /// Single connection pool for the application
    pool: Arc<OnceCell<PgPool>>,
    /// Environment configuration
    config: Arc<EnvironmentVariables>,
}

impl DatabaseService {
    /// Creates a new DatabaseService instance.
    /// Note: The pool is not initialized until `initialize()` is called.
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        Self {
            pool: Arc::new(OnceCell::new()),
            config,
        }
    }

    /// Initializes the database service by creating the pool and the schema.
    pub async fn initialize(&self) -> Result<()> {
        info!("Initializing DatabaseService...");

        // Initialize the pool if not already initialized
        self.pool.get_or_try_init(|| async {
            self.create_pool().await
        }).await?;

        let pool: &PgPool = self.get_pool()?;

        self.initialize_schema(pool).await?;

        info!("DatabaseService initialized successfully");
        Ok(())
    }

    /// Gracefully shuts down the service.
    pub async fn shutdown(&self) {
        info!("Initiating DatabaseService shutdown...");
        if let Some(pool) = self.pool.get() {
            pool.close().await;
            info!("Database connection pool closed");
        } else {
            debug!("Database pool was not initialized, nothing to close");
        }
    }

    /// Returns the connection pool.
    /// Errors if the pool has not been initialized.
    pub fn get_pool(&self) -> Result<&PgPool> {
        self.pool.get().ok_or_else(|| anyhow::anyhow!("Database pool not initialized"))
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

impl DatabaseService {
    /// Creates the connection pool based on environment config
    async fn create_pool(&self) -> Result<PgPool> {
        let connect_options: PgConnectOptions = self.create_connect_options()?;

        let pool: PgPool = PgPoolOptions::new()
            .max_connections(self.config.db_max_connections)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(30))
            .connect_with(connect_options)
            .await
            .context("Failed to create database connection pool")?;

        Ok(pool)
    }

    /// Creates connection options from DATABASE_URL or the individual DB_* settings.
    /// Every statement is logged so each round-trip shows up in the logs.
    fn create_connect_options(&self) -> Result<PgConnectOptions> {
        let options: PgConnectOptions = match self.config.database_url.as_deref() {
            Some(url) => PgConnectOptions::from_str(url).context("Invalid DATABASE_URL")?,
            None => {
                // Configure SSL based on environment
                let ssl_mode: PgSslMode = if self.config.is_development() {
                    PgSslMode::Prefer
                } else {
                    PgSslMode::Require
                };

                PgConnectOptions::new()
                    .host(&self.config.db_host)
                    .port(self.config.db_port)
                    .username(&self.config.db_user)
                    .password(&self.config.db_password)
                    .database(&self.config.db_name)
                    .ssl_mode(ssl_mode)
            }
        };

        Ok(options
            .options([("timezone", "UTC"), ("application_name", "query-strategies-api")])
            .log_statements(LevelFilter::Info))
    }

    /// Runs the initialization SQL
    async fn initialize_schema(&self, pool: &PgPool) -> Result<()> {
        info!("Executing schema initialization...");

        pool.execute(INIT_SCHEMA_SQL)
            .await
            .context("Failed to execute schema initialization SQL")?;

        info!("Schema initialization completed");
        Ok(())
    }
}
