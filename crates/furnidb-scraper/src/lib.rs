pub mod aggregate;
pub mod client;
pub mod error;
pub mod query;
pub mod resolve;
pub mod sources;

pub use aggregate::{lowest_quote, PriceQuote};
pub use client::{fetch_quotes, DelayBounds, PriceClient};
pub use error::ScrapeError;
pub use query::optimize_query;
pub use sources::{load_sources, SourceConfig, SourcesFile};
