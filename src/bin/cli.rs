use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use trivia_api::db::{
    self,
    transfer::{export_data, import_data},
};
use trivia_api::telemetry::{init_tracing, CLI_LOG_FILTER};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending migrations
    Migrate,
    /// Replace categories and questions with the CSV files in a directory
    Import { path: PathBuf },
    /// Write categories and questions as CSV files into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing(CLI_LOG_FILTER)?;
    let cli = Cli::parse();
    let pool = db::establish_connection(&cli.db_path.display().to_string())
        .await
        .context("Cannot connect to DB")?;
    db::run_migrations(&pool).await.context("Migrations failed")?;

    match cli.command {
        Commands::Migrate => tracing::info!("Database is up to date"),
        Commands::Export { path } => {
            let counts = export_data(&pool, &path).await.context("Cannot export")?;
            tracing::info!(
                "Exported {} categories and {} questions",
                counts.categories,
                counts.questions
            );
        }
        Commands::Import { path } => {
            let counts = import_data(&pool, &path).await.context("Cannot import")?;
            tracing::info!(
                "Imported {} categories and {} questions",
                counts.categories,
                counts.questions
            );
        }
    }
    Ok(())
}
