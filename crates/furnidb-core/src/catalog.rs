//! Deduplication of freshly normalized items against the persisted catalog.

use std::collections::HashSet;

use crate::item::NormalizedItem;

/// Filters `batch` down to items whose `name` is not already in the catalog.
///
/// Membership is exact string equality — no trimming, case folding, or fuzzy
/// matching. Two visually identical names differing by whitespace are treated
/// as distinct rows.
#[must_use]
pub fn filter_new_items(
    batch: Vec<NormalizedItem>,
    existing_names: &HashSet<String>,
) -> Vec<NormalizedItem> {
    batch
        .into_iter()
        .filter(|item| !existing_names.contains(&item.name))
        .collect()
}
