//! Generic first-match-wins selector resolution and price-text parsing.
//!
//! Every source shares this one resolver; per-source behavior lives entirely
//! in the selector chains configured in `sources.yaml`.

use regex::Regex;
use scraper::{Html, Selector};

/// Walks the selector chain in order and returns the visible text of the
/// first element any candidate resolves to, or `None` when the chain is
/// exhausted. Selectors are validated at config load; one that still fails to
/// parse here is skipped.
#[must_use]
pub fn first_match_text(document: &str, selectors: &[String]) -> Option<String> {
    let html = Html::parse_document(document);

    for candidate in selectors {
        let Ok(selector) = Selector::parse(candidate) else {
            continue;
        };
        if let Some(element) = html.select(&selector).next() {
            let text: String = element.text().collect::<Vec<_>>().join(" ");
            let text = text.trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }

    None
}

/// Extracts a price from visible element text.
///
/// Thousands separators are stripped first; the value is accepted only when a
/// run of at least three consecutive digits remains (e.g. `"45,000원"` →
/// `45000`). Shorter digit runs are rejected as noise (badge counts, review
/// stars) rather than prices, and a run of zeros is not a price at all.
#[must_use]
pub fn parse_price_text(text: &str) -> Option<i64> {
    let stripped = text.replace(',', "");
    let re = Regex::new(r"\d{3,}").expect("valid price digits regex");
    re.find(&stripped)?
        .as_str()
        .parse::<i64>()
        .ok()
        .filter(|v| *v > 0)
}
