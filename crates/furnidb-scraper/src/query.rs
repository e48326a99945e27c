//! Search-phrase optimization for catalog item names.
//!
//! Catalog names carry noise that tanks storefront search relevance:
//! parenthetical notes, colors, assembly-state words, and raw dimensions.
//! Stripping them and keeping the first two remaining words gives each source
//! a short phrase it can actually match.

use regex::Regex;

/// Reduces a free-text item name to a compact search phrase.
///
/// Pure and deterministic: identical input always yields the identical
/// phrase, and the output never exceeds two whitespace-separated words.
#[must_use]
pub fn optimize_query(name: &str) -> String {
    // Order matters: parentheticals first so their contents never leak color
    // or state tokens back into the phrase.
    let removals = [
        r"\([^)]*\)",
        r"그레이|화이트|블랙|브라운|베이지",
        r"펼친상태|접힌상태|완성품|unfolded|folded|finished",
        r"\d+x\d+|cm|mm",
    ];

    let mut optimized = name.to_string();
    for pattern in removals {
        let re = Regex::new(pattern).expect("valid removal regex");
        optimized = re.replace_all(&optimized, "").into_owned();
    }

    optimized
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_color_state_and_size_tokens() {
        assert_eq!(optimize_query("그레이 소파 (접힌상태) 1200x800"), "소파");
    }

    #[test]
    fn keeps_at_most_two_words() {
        assert_eq!(optimize_query("모던 원목 식탁 세트"), "모던 원목");
    }

    #[test]
    fn strips_parenthetical_contents_entirely() {
        assert_eq!(optimize_query("책상 (화이트 1200x600 완성품)"), "책상");
    }

    #[test]
    fn strips_english_state_tokens() {
        assert_eq!(optimize_query("unfolded lounge chair"), "lounge chair");
    }

    #[test]
    fn unfolded_is_removed_before_folded() {
        // "unfolded" must not leave a dangling "un" behind.
        assert_eq!(optimize_query("unfolded bed"), "bed");
    }

    #[test]
    fn strips_unit_suffixes() {
        assert_eq!(optimize_query("선반 120cm 화이트"), "선반 120");
    }

    #[test]
    fn is_deterministic() {
        let name = "그레이 소파 (접힌상태) 1200x800";
        assert_eq!(optimize_query(name), optimize_query(name));
    }

    #[test]
    fn output_never_exceeds_two_words() {
        for name in ["긴 이름 을 가진 가구 상품", "a b c d e", ""] {
            assert!(optimize_query(name).split_whitespace().count() <= 2);
        }
    }

    #[test]
    fn empty_input_yields_empty_phrase() {
        assert_eq!(optimize_query(""), "");
        assert_eq!(optimize_query("그레이 (접힌상태)"), "");
    }
}
