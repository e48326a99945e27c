//! HTTP fetch of one quote per configured source, in priority order.

use std::time::Duration;

use crate::aggregate::PriceQuote;
use crate::error::ScrapeError;
use crate::resolve::{first_match_text, parse_price_text};
use crate::sources::SourceConfig;

/// HTTP client shared across all source attempts in a run.
///
/// Each source query is one GET with a bounded wait; the response body and
/// connection are released when the request scope ends, so a failing source
/// never holds resources into the next attempt.
pub struct PriceClient {
    client: reqwest::Client,
}

impl PriceClient {
    /// Creates a `PriceClient` with the configured default timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Attempts one quote from one source: navigate to the search URL, walk
    /// the selector fallback chain, and parse the first present element's
    /// text as a price.
    ///
    /// `Ok(None)` means the source responded but no selector yielded
    /// parseable price text — an absent quote, not an error.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::UnexpectedStatus`] — non-2xx response.
    /// - [`ScrapeError::Http`] — network failure or the bounded wait expired.
    pub async fn fetch_quote(
        &self,
        source: &SourceConfig,
        query: &str,
    ) -> Result<Option<i64>, ScrapeError> {
        let url = source.search_url(query);

        let mut request = self.client.get(&url);
        if let Some(secs) = source.timeout_secs {
            request = request.timeout(Duration::from_secs(secs));
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        Ok(first_match_text(&body, &source.selectors)
            .as_deref()
            .and_then(parse_price_text))
    }
}

/// Inclusive bounds for the randomized pause between source attempts,
/// keeping the request cadence irregular enough to avoid tripping
/// per-source throttling.
#[derive(Debug, Clone, Copy)]
pub struct DelayBounds {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayBounds {
    #[must_use]
    pub fn from_app_config(config: &furnidb_core::AppConfig) -> Self {
        Self {
            min_ms: config.source_delay_min_ms,
            max_ms: config.source_delay_max_ms,
        }
    }

    /// Zero delay, for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            min_ms: 0,
            max_ms: 0,
        }
    }

    async fn pause(self) {
        if self.max_ms == 0 {
            return;
        }
        let ms = rand::random_range(self.min_ms..=self.max_ms);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}

/// Queries every source strictly in order, one quote slot per source.
///
/// A failure at any source contributes an absent quote and never blocks the
/// remaining sources. The returned vector preserves source order so the
/// aggregator's tie-breaking follows configured priority.
pub async fn fetch_quotes(
    client: &PriceClient,
    sources: &[SourceConfig],
    query: &str,
    delay: DelayBounds,
) -> Vec<PriceQuote> {
    let mut quotes = Vec::with_capacity(sources.len());

    for (idx, source) in sources.iter().enumerate() {
        if idx > 0 {
            delay.pause().await;
        }

        let amount = match client.fetch_quote(source, query).await {
            Ok(Some(amount)) => {
                tracing::info!(source = %source.id, amount, "source quoted a price");
                Some(amount)
            }
            Ok(None) => {
                tracing::info!(source = %source.id, "no parseable price at source");
                None
            }
            Err(e) => {
                tracing::warn!(source = %source.id, error = %e, "source unavailable");
                None
            }
        };

        quotes.push(PriceQuote {
            source_id: source.id.clone(),
            amount,
        });
    }

    quotes
}
