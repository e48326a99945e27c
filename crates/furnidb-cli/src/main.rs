mod ingest;
mod price;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::price::PriceMode;

#[derive(Debug, Parser)]
#[command(name = "furnidb")]
#[command(about = "Furniture catalog ingestion and price resolution")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize scraped records and insert the ones not already cataloged
    Ingest {
        /// JSON-lines file of raw records produced by the UI driver
        input: PathBuf,

        /// Preview what would be inserted without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Resolve a price for every catalog row that has none
    Price {
        /// Where prices come from: external sources or category fallback only
        #[arg(long, value_enum, default_value_t = PriceMode::Sources)]
        mode: PriceMode,

        /// Cap the number of rows processed in this run
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = furnidb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = furnidb_db::PoolConfig::from_app_config(&config);
    let pool = furnidb_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = furnidb_db::run_migrations(&pool).await?;
    if applied > 0 {
        tracing::info!(applied, "applied pending migrations");
    }

    match cli.command {
        Commands::Ingest { input, dry_run } => {
            ingest::run_ingest(&pool, &input, dry_run).await?;
        }
        Commands::Price { mode, limit } => {
            price::run_price(&pool, &config, mode, limit).await?;
        }
    }

    Ok(())
}
