//! Database operations for the `furniture.furnitures` table.
//!
//! `name` is the application-level dedup key; it is deliberately NOT declared
//! unique at the storage layer, so uniqueness is enforced by filtering new
//! batches against [`list_names`] before insertion.

use std::collections::HashSet;

use sqlx::PgPool;

use furnidb_core::NormalizedItem;

use crate::DbError;

/// Postgres SQLSTATE for "relation does not exist".
const UNDEFINED_TABLE: &str = "42P01";

/// A catalog row still awaiting price resolution.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UnpricedRow {
    pub furniture_id: i64,
    pub name: String,
}

/// Fetches the set of display names already persisted in the catalog.
///
/// A missing `furnitures` table (first run before migrations, or a freshly
/// provisioned database) yields an empty set rather than an error, so a batch
/// ingest can proceed treating every record as new.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] for any failure other than an undefined table.
pub async fn list_names(pool: &PgPool) -> Result<HashSet<String>, DbError> {
    let result = sqlx::query_scalar::<_, String>("SELECT name FROM furniture.furnitures")
        .fetch_all(pool)
        .await;

    match result {
        Ok(names) => Ok(names.into_iter().collect()),
        Err(e) if is_undefined_table(&e) => Ok(HashSet::new()),
        Err(e) => Err(e.into()),
    }
}

fn is_undefined_table(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNDEFINED_TABLE)
    )
}

/// Inserts a batch of normalized items inside a single transaction.
///
/// Returns the number of rows inserted. Width/depth/height map to
/// `length_x`/`length_z`/`length_y` respectively, matching the axis layout the
/// simulator reads (`x` = width, `y` = height, `z` = depth).
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert fails; the transaction is rolled
/// back and no rows from the batch are persisted.
pub async fn insert_items(pool: &PgPool, items: &[NormalizedItem]) -> Result<usize, DbError> {
    let mut tx = pool.begin().await?;

    for item in items {
        sqlx::query(
            "INSERT INTO furniture.furnitures \
                 (name, description, length_x, length_y, length_z, \
                  image_url, model_url, price, brand, is_active, category_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.width)
        .bind(item.height)
        .bind(item.depth)
        .bind(&item.image_url)
        .bind(&item.model_url)
        .bind(item.price)
        .bind(&item.brand)
        .bind(item.is_active)
        .bind(item.category_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(items.len())
}

/// Lists rows whose price has not been resolved yet, ordered by id so
/// repeated runs make progress in a stable order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_unpriced(pool: &PgPool) -> Result<Vec<UnpricedRow>, DbError> {
    let rows = sqlx::query_as::<_, UnpricedRow>(
        "SELECT furniture_id, name \
         FROM furniture.furnitures \
         WHERE price IS NULL \
         ORDER BY furniture_id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Writes a resolved price onto one row. Each call is its own transaction so
/// partial progress survives a mid-run abort.
///
/// # Errors
///
/// Returns [`DbError::NotFound`] if the row does not exist, or
/// [`DbError::Sqlx`] if the update fails.
pub async fn update_price(pool: &PgPool, furniture_id: i64, amount: i64) -> Result<(), DbError> {
    let rows_affected = sqlx::query(
        "UPDATE furniture.furnitures \
         SET price = $2 \
         WHERE furniture_id = $1",
    )
    .bind(furniture_id)
    .bind(amount)
    .execute(pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        return Err(DbError::NotFound);
    }
    Ok(())
}
