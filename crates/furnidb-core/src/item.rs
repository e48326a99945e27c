//! Domain types shared across the ingestion and pricing paths.

use serde::{Deserialize, Serialize};

/// One scraped catalog record as emitted by the external UI driver.
///
/// `text` is the raw popup text block. The only structural guarantee is that
/// the first line is the display name; the remaining lines are an unordered
/// mix of brand text and a dimension string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawItemRecord {
    pub text: String,
    pub image_url: String,
    pub category_id: i32,
}

/// A catalog row in the shape of `furniture.furnitures`.
///
/// `width`, `depth`, and `height` are NOT NULL downstream; the normalizer
/// guarantees they are always populated, defaulting to `0` when the dimension
/// text cannot be parsed. `price` stays `None` until the pricing path
/// resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub name: String,
    /// Empty string when no brand line was present in the raw record.
    pub brand: String,
    pub width: i32,
    pub depth: i32,
    pub height: i32,
    pub image_url: String,
    pub category_id: i32,
    pub is_active: bool,
    pub price: Option<i64>,
    pub model_url: Option<String>,
    pub description: Option<String>,
}
