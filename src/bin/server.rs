use anyhow::Context;
use trivia_api::configuration::get_configuration;
use trivia_api::db;
use trivia_api::server::app::run_server;
use trivia_api::telemetry::{init_tracing, SERVER_LOG_FILTER};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing(SERVER_LOG_FILTER)?;
    let settings = get_configuration().context("Failed to read configuration")?;

    let pool = db::establish_connection(&settings.database.path)
        .await
        .with_context(|| format!("Cannot open database {}", settings.database.path))?;
    if settings.database.run_migrations {
        tracing::info!("Running db migrations...");
        db::run_migrations(&pool).await?;
    }

    run_server(pool, &settings.application.address()).await
}
