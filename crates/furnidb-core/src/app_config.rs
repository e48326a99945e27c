use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub log_level: String,
    /// YAML file describing the ordered list of price sources.
    pub sources_path: PathBuf,
    /// YAML file describing the category keyword → price-range table.
    pub categories_path: PathBuf,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// Bounded wait for a single source request (navigation + selector scan).
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// Inclusive bounds for the randomized delay between source attempts.
    pub source_delay_min_ms: u64,
    pub source_delay_max_ms: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("database_url", &"[redacted]")
            .field("log_level", &self.log_level)
            .field("sources_path", &self.sources_path)
            .field("categories_path", &self.categories_path)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("db_acquire_timeout_secs", &self.db_acquire_timeout_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("fetch_user_agent", &self.fetch_user_agent)
            .field("source_delay_min_ms", &self.source_delay_min_ms)
            .field("source_delay_max_ms", &self.source_delay_max_ms)
            .finish()
    }
}
