//! Batch ingestion: normalize raw records, drop the ones already cataloged,
//! insert the rest.

use std::path::Path;

use anyhow::Context;

use furnidb_core::{filter_new_items, normalize_record, RawItemRecord};

/// Reads raw records from a JSON-lines file, normalizes them, filters out
/// names already in the catalog, and inserts the remainder in one
/// transaction. Prints the ingest run summary.
///
/// A missing `furnitures` table is treated as an empty catalog rather than a
/// failure, so a batch can seed a fresh database.
///
/// # Errors
///
/// Returns an error if the input file cannot be read or parsed, or if the
/// batch insert fails.
pub(crate) async fn run_ingest(
    pool: &sqlx::PgPool,
    input: &Path,
    dry_run: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read records file {}", input.display()))?;
    let records = parse_records(&content)?;
    let discovered = records.len();

    let batch: Vec<_> = records.iter().map(normalize_record).collect();

    let existing_names = furnidb_db::list_names(pool).await?;
    let new_items = filter_new_items(batch, &existing_names);
    let duplicate = discovered - new_items.len();

    if dry_run {
        println!(
            "dry-run: {} records discovered, {} duplicate, would insert {}",
            discovered,
            duplicate,
            new_items.len()
        );
        for item in &new_items {
            println!("  {}", item.name);
        }
        return Ok(());
    }

    let inserted = if new_items.is_empty() {
        println!("no new items to insert");
        0
    } else {
        furnidb_db::insert_items(pool, &new_items).await?
    };

    println!("ingest summary: discovered {discovered}, duplicate {duplicate}, inserted {inserted}");
    Ok(())
}

/// Parses a JSON-lines payload of [`RawItemRecord`]s, skipping blank lines.
fn parse_records(content: &str) -> anyhow::Result<Vec<RawItemRecord>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str::<RawItemRecord>(line)
                .with_context(|| format!("invalid record on line {}", idx + 1))
        })
        .collect()
}
