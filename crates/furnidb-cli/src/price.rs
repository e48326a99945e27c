//! Price resolution for catalog rows with no price.
//!
//! Each row is resolved and persisted independently: a failure on one row is
//! logged and counted, then the loop moves on, and every successful update
//! commits on its own so partial progress survives a mid-run abort.

use clap::ValueEnum;

use furnidb_core::{fallback_price, AppConfig};
use furnidb_scraper::{fetch_quotes, lowest_quote, optimize_query, DelayBounds, PriceClient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum PriceMode {
    /// Query the configured external sources, falling back per row when all
    /// quotes come up absent
    Sources,
    /// Skip the external sources and draw every price from the category table
    Fallback,
}

impl std::fmt::Display for PriceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceMode::Sources => write!(f, "sources"),
            PriceMode::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Default)]
struct PriceSummary {
    priced_by_source: usize,
    priced_by_fallback: usize,
    failed: usize,
}

/// Resolves a price for every unpriced catalog row and prints the run
/// summary.
///
/// # Errors
///
/// Returns an error if configuration files cannot be loaded, the HTTP client
/// cannot be constructed, or the unpriced-rows query fails. Per-row
/// resolution and persistence failures are counted, not propagated.
pub(crate) async fn run_price(
    pool: &sqlx::PgPool,
    config: &AppConfig,
    mode: PriceMode,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let categories = furnidb_core::load_categories(&config.categories_path)?;

    let fetcher = match mode {
        PriceMode::Sources => {
            let sources = furnidb_scraper::load_sources(&config.sources_path)?;
            let client = PriceClient::new(config.fetch_timeout_secs, &config.fetch_user_agent)?;
            Some((sources, client))
        }
        PriceMode::Fallback => None,
    };

    let mut rows = furnidb_db::list_unpriced(pool).await?;
    if let Some(limit) = limit {
        rows.truncate(limit);
    }
    if rows.is_empty() {
        println!("no rows awaiting a price");
        return Ok(());
    }

    let total = rows.len();
    let delay = DelayBounds::from_app_config(config);
    let mut summary = PriceSummary::default();

    for (idx, row) in rows.iter().enumerate() {
        tracing::info!(
            furniture_id = row.furniture_id,
            name = %row.name,
            position = idx + 1,
            total,
            "resolving price"
        );

        let sourced = match &fetcher {
            Some((sources, client)) => {
                let query = optimize_query(&row.name);
                let quotes = fetch_quotes(client, &sources.sources, &query, delay).await;
                lowest_quote(&quotes)
            }
            None => None,
        };

        let (amount, from_source) = match sourced {
            Some(amount) => (amount, true),
            None => (fallback_price(&categories, &row.name), false),
        };

        match furnidb_db::update_price(pool, row.furniture_id, amount).await {
            Ok(()) => {
                tracing::info!(
                    furniture_id = row.furniture_id,
                    amount,
                    from_source,
                    "price persisted"
                );
                if from_source {
                    summary.priced_by_source += 1;
                } else {
                    summary.priced_by_fallback += 1;
                }
            }
            Err(e) => {
                tracing::error!(
                    furniture_id = row.furniture_id,
                    error = %e,
                    "failed to persist price; skipping row"
                );
                summary.failed += 1;
            }
        }
    }

    println!(
        "pricing summary: priced-by-source {}, priced-by-fallback {}, failed {}",
        summary.priced_by_source, summary.priced_by_fallback, summary.failed
    );
    Ok(())
}
