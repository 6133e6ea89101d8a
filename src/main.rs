// Start of file: src/main.rs

use std::sync::Arc;
use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

use query_strategies_api::core::{logging, server};
use query_strategies_api::database::seed::seed_demo_data;
use query_strategies_api::{AppState, CompanyRepository, DatabaseService, EnvironmentVariables, PgCompanyRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);

    let database: DatabaseService = DatabaseService::new(environment.clone());
    database.initialize().await?;

    let repository: Arc<dyn CompanyRepository> =
        Arc::new(PgCompanyRepository::new(database.get_pool()?.clone()));

    if environment.seed_demo_data {
        seed_demo_data(repository.as_ref()).await?;
    }

    let state: AppState = AppState::new(environment.clone(), repository);
    let app: axum::Router = server::create_app(state);

    let listener: TcpListener = server::setup_listener(&environment).await?;
    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    database.shutdown().await;

    Ok(())
}

// End of file: src/main.rs
