use thiserror::Error;

pub mod app_config;
pub mod catalog;
pub mod categories;
pub mod config;
pub mod item;
pub mod normalize;

pub use app_config::AppConfig;
pub use catalog::filter_new_items;
pub use categories::{fallback_price, load_categories, CategoriesFile, CategoryBucket};
pub use config::{load_app_config, load_app_config_from_env};
pub use item::{NormalizedItem, RawItemRecord};
pub use normalize::normalize_record;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read config file {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    FileParse(#[from] serde_yaml::Error),

    #[error("config validation failed: {0}")]
    Validation(String),
}
