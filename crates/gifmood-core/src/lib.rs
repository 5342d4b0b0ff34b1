pub mod app_config;
pub mod catalog;
pub mod config;
pub mod credential;
pub mod keyword;
pub mod media;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use catalog::{emotion_catalog, substitute_set, EMOTIONS};
pub use config::{load_app_config, load_app_config_from_env};
pub use credential::{Credential, PLACEHOLDER_API_KEY};
pub use keyword::{Keyword, KeywordError};
pub use media::MediaItem;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
