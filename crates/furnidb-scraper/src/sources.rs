//! Price-source definitions loaded from YAML.
//!
//! Priority is positional: sources are attempted in file order, and the file
//! order also breaks ties downstream when multiple sources quote the same
//! amount. Each source carries its own selector fallback chain so adapting to
//! a storefront markup change is a config edit, not a code change.

use std::path::Path;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use furnidb_core::ConfigError;

/// Placeholder substituted with the percent-encoded search phrase.
const QUERY_PLACEHOLDER: &str = "{query}";

/// One external price source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Stable identifier used in quotes and logs (e.g. `naver`).
    pub id: String,
    pub name: String,
    /// Search URL with a `{query}` placeholder.
    pub url_template: String,
    /// Ordered CSS selector candidates; first present match wins.
    pub selectors: Vec<String>,
    /// Per-source override of the bounded request wait.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl SourceConfig {
    /// Builds the search URL for `query`, percent-encoding it into the
    /// template's `{query}` slot.
    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC).to_string();
        self.url_template.replace(QUERY_PLACEHOLDER, &encoded)
    }
}

#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SourceConfig>,
}

/// Load and validate the ordered source list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation (duplicate ids, missing `{query}` placeholder, empty or
/// unparseable selector chains).
pub fn load_sources(path: &Path) -> Result<SourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: SourcesFile = serde_yaml::from_str(&content)?;
    validate_sources(&file)?;
    Ok(file)
}

fn validate_sources(file: &SourcesFile) -> Result<(), ConfigError> {
    let mut seen_ids = std::collections::HashSet::new();

    for source in &file.sources {
        if source.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "source id must be non-empty".to_string(),
            ));
        }
        if !seen_ids.insert(source.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate source id: '{}'",
                source.id
            )));
        }
        if !source.url_template.contains(QUERY_PLACEHOLDER) {
            return Err(ConfigError::Validation(format!(
                "source '{}' url_template is missing the {QUERY_PLACEHOLDER} placeholder",
                source.id
            )));
        }
        if source.selectors.is_empty() {
            return Err(ConfigError::Validation(format!(
                "source '{}' has an empty selector chain",
                source.id
            )));
        }
        for selector in &source.selectors {
            if scraper::Selector::parse(selector).is_err() {
                return Err(ConfigError::Validation(format!(
                    "source '{}' has an invalid CSS selector: '{selector}'",
                    source.id
                )));
            }
        }
    }

    Ok(())
}
