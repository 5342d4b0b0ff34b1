use std::net::SocketAddr;

use crate::credential::Credential;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub giphy_api_key: Credential,
    pub giphy_base_url: String,
    pub giphy_timeout_secs: u64,
    pub giphy_rating: String,
    pub giphy_lang: String,
    pub user_agent: String,
    pub cors_origins: Vec<String>,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            // Credential's own Debug impl redacts the secret.
            .field("giphy_api_key", &self.giphy_api_key)
            .field("giphy_base_url", &self.giphy_base_url)
            .field("giphy_timeout_secs", &self.giphy_timeout_secs)
            .field("giphy_rating", &self.giphy_rating)
            .field("giphy_lang", &self.giphy_lang)
            .field("user_agent", &self.user_agent)
            .field("cors_origins", &self.cors_origins)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
