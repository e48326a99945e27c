//! Normalization from raw popup text blocks to [`NormalizedItem`].
//!
//! The raw text carries no schema beyond "name first": the remaining lines
//! are an unordered mix of brand text and a dimension string like
//! `"W:535 x D:612 x H:1660 (mm)"`. Parsing is best-effort and never fails;
//! anything unparsable collapses to the NOT NULL-safe defaults.

use crate::item::{NormalizedItem, RawItemRecord};

/// Normalizes one raw record into a catalog row.
///
/// - Line 0 is always the display name.
/// - The first line containing a literal `x` and at least one axis marker
///   (`W:`, `D:`, `H:`) is the dimension line.
/// - The first non-empty line seen before the dimension line is found is the
///   brand; at most one brand line is kept.
/// - Unparsable dimensions yield `width = depth = height = 0`, never a
///   partial parse.
#[must_use]
pub fn normalize_record(raw: &RawItemRecord) -> NormalizedItem {
    let mut lines = raw.text.lines();
    let name = lines.next().unwrap_or("").trim().to_string();

    let mut brand = String::new();
    let mut dimension_line = None;
    for line in lines {
        if is_dimension_line(line) {
            dimension_line = Some(line);
            break;
        }
        if brand.is_empty() && !line.trim().is_empty() {
            brand = line.trim().to_string();
        }
    }

    let (width, depth, height) = dimension_line.map_or((None, None, None), parse_dimensions);

    NormalizedItem {
        name,
        brand,
        width: width.unwrap_or(0),
        depth: depth.unwrap_or(0),
        height: height.unwrap_or(0),
        image_url: raw.image_url.clone(),
        category_id: raw.category_id,
        is_active: false,
        price: None,
        model_url: None,
        description: None,
    }
}

fn is_dimension_line(line: &str) -> bool {
    line.contains('x') && (line.contains("W:") || line.contains("D:") || line.contains("H:"))
}

/// Parses a dimension line into `(width, depth, height)`.
///
/// All-or-nothing on parse errors: a wrong segment count or a non-integer
/// value resets every axis. A segment with no recognized axis marker leaves
/// just that axis unset.
fn parse_dimensions(line: &str) -> (Option<i32>, Option<i32>, Option<i32>) {
    let cleaned = line.replace("(mm)", "").replace("mm", "");
    let parts: Vec<&str> = cleaned.split('x').collect();
    if parts.len() != 3 {
        return (None, None, None);
    }

    let mut width = None;
    let mut depth = None;
    let mut height = None;
    for part in &parts {
        let axis = if part.contains("W:") {
            &mut width
        } else if part.contains("D:") {
            &mut depth
        } else if part.contains("H:") {
            &mut height
        } else {
            continue;
        };

        match part.split(':').nth(1).map(|v| v.trim().parse::<i32>()) {
            Some(Ok(value)) if value >= 0 => *axis = Some(value),
            _ => return (None, None, None),
        }
    }

    (width, depth, height)
}
