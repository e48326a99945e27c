//! Aggregation of per-source quotes into one authoritative price.

/// A candidate price from one source. `amount` is `None` when the source was
/// unreachable or no selector produced parseable price text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuote {
    pub source_id: String,
    pub amount: Option<i64>,
}

/// Returns the minimum among present quotes, or `None` when every quote is
/// absent. Absent quotes are excluded, never treated as zero.
///
/// Minimum is the contract: when sources disagree, the cheapest observed
/// listing is recorded.
#[must_use]
pub fn lowest_quote(quotes: &[PriceQuote]) -> Option<i64> {
    quotes.iter().filter_map(|q| q.amount).min()
}
