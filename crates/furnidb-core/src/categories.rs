//! Category keyword → price-range table backing the fallback price generator.
//!
//! When no external source produces a quote, the item's name is classified
//! against an ordered list of keyword buckets and a synthetic price is drawn
//! uniformly from the matched bucket's inclusive range. Ranges are stored in
//! thousand-currency-unit granularity and multiplied out on draw.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// An inclusive price range in thousand-currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// One keyword bucket. The first bucket whose any keyword appears as a
/// substring of the lower-cased item name wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub name: String,
    pub keywords: Vec<String>,
    #[serde(flatten)]
    pub range: PriceRange,
}

#[derive(Debug, Deserialize)]
pub struct CategoriesFile {
    pub buckets: Vec<CategoryBucket>,
    /// Applied when no bucket matches. Required so the fallback path can
    /// never come up empty.
    pub default: PriceRange,
}

/// Load and validate the category table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_categories(path: &Path) -> Result<CategoriesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CategoriesFile = serde_yaml::from_str(&content)?;
    validate_categories(&file)?;
    Ok(file)
}

fn validate_categories(file: &CategoriesFile) -> Result<(), ConfigError> {
    for bucket in &file.buckets {
        if bucket.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "category bucket name must be non-empty".to_string(),
            ));
        }
        if bucket.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "category bucket '{}' has no usable keywords",
                bucket.name
            )));
        }
        validate_range(&bucket.name, bucket.range)?;
    }
    validate_range("default", file.default)?;
    Ok(())
}

fn validate_range(label: &str, range: PriceRange) -> Result<(), ConfigError> {
    if range.min < 1 || range.max < range.min {
        return Err(ConfigError::Validation(format!(
            "category '{label}' has invalid range {}..{}; bounds must satisfy 1 <= min <= max",
            range.min, range.max
        )));
    }
    Ok(())
}

impl CategoriesFile {
    /// Returns the first bucket with a keyword contained in the lower-cased
    /// name, or `None` when the default range applies.
    #[must_use]
    pub fn match_bucket(&self, name: &str) -> Option<&CategoryBucket> {
        let lower = name.to_lowercase();
        self.buckets
            .iter()
            .find(|bucket| bucket.keywords.iter().any(|kw| lower.contains(kw.as_str())))
    }
}

/// Draws a synthetic price for `name` from the matched (or default) bucket.
///
/// The result is always a multiple of 1000 inside the selected bucket's
/// inclusive bounds. This path cannot fail; it is the terminal fallback when
/// every external source came up empty.
#[must_use]
pub fn fallback_price(categories: &CategoriesFile, name: &str) -> i64 {
    let range = categories
        .match_bucket(name)
        .map_or(categories.default, |bucket| bucket.range);

    rand::random_range(range.min..=range.max) * 1000
}
